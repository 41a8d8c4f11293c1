use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::engagement::embeds::{display_name_for_user, no_profile_hint_message};
use ember_core::{Context, Error};
use ember_database::impls::profiles::get_profile;

pub const META: CommandMeta = CommandMeta {
    name: "profile",
    desc: "Shows a user's profile card.",
    category: "engagement",
    usage: "!profile [user]",
};

#[poise::command(prefix_command, slash_command, category = "Engagement")]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "Target user"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.as_ref().unwrap_or_else(|| ctx.author());

    let Some(record) = get_profile(&ctx.data().db, user.id.get()).await? else {
        ctx.say(no_profile_hint_message()).await?;
        return Ok(());
    };

    let png = ctx.data().cards.render_profile_card(
        &display_name_for_user(user),
        record.xp,
        record.level,
        record.messages,
        &record.bio,
    )?;

    ctx.send(
        poise::CreateReply::default()
            .attachment(serenity::CreateAttachment::bytes(png, "profile.png")),
    )
    .await?;
    Ok(())
}
