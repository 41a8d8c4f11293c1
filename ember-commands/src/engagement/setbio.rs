use crate::CommandMeta;
use crate::engagement::embeds::no_profile_hint_message;
use ember_core::{Context, Error};
use ember_database::impls::profiles::set_bio;

pub const META: CommandMeta = CommandMeta {
    name: "setbio",
    desc: "Sets the bio shown on your profile card.",
    category: "engagement",
    usage: "!setbio <text>",
};

#[poise::command(prefix_command, slash_command, category = "Engagement")]
pub async fn setbio(
    ctx: Context<'_>,
    #[description = "New bio text"]
    #[rest]
    bio: String,
) -> Result<(), Error> {
    let bio = bio.trim();
    if bio.is_empty() {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    }

    // The ledger truncates to the 200-character storage cap and never creates
    // a profile implicitly.
    let updated = set_bio(&ctx.data().db, ctx.author().id.get(), bio).await?;
    if updated {
        ctx.say("Bio updated successfully!").await?;
    } else {
        ctx.say(no_profile_hint_message()).await?;
    }

    Ok(())
}
