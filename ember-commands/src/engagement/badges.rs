use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::engagement::embeds::{display_name_for_user, no_profile_message};
use ember_core::{Context, Error};
use ember_database::impls::profiles::get_profile;
use ember_utils::badges::earned_badges;
use ember_utils::embed::BADGES_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "badges",
    desc: "Lists the badges a user has earned.",
    category: "engagement",
    usage: "!badges [user]",
};

#[poise::command(prefix_command, slash_command, category = "Engagement")]
pub async fn badges(
    ctx: Context<'_>,
    #[description = "Target user"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.as_ref().unwrap_or_else(|| ctx.author());

    let Some(record) = get_profile(&ctx.data().db, user.id.get()).await? else {
        ctx.say(no_profile_message()).await?;
        return Ok(());
    };

    let earned = earned_badges(record.xp, record.level, record.messages);
    let value = if earned.is_empty() {
        "No badges yet.".to_owned()
    } else {
        earned.join(", ")
    };

    let embed = serenity::CreateEmbed::new()
        .title(format!("{}'s Badges", display_name_for_user(user)))
        .color(BADGES_EMBED_COLOR)
        .field("Earned Badges", value, false);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
