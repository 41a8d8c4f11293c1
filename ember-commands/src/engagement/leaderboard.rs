use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::engagement::embeds::fetch_display_name;
use ember_core::{Context, Error};
use ember_database::impls::profiles::{LEADERBOARD_LIMIT, top_profiles};
use ember_utils::embed::LEADERBOARD_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "leaderboard",
    desc: "Shows the top users by XP.",
    category: "engagement",
    usage: "!leaderboard",
};

#[poise::command(prefix_command, slash_command, category = "Engagement")]
pub async fn leaderboard(ctx: Context<'_>) -> Result<(), Error> {
    let entries = top_profiles(&ctx.data().db, LEADERBOARD_LIMIT).await?;
    if entries.is_empty() {
        ctx.say("No profiles recorded yet.").await?;
        return Ok(());
    }

    let mut embed = serenity::CreateEmbed::new()
        .title("Leaderboard")
        .color(LEADERBOARD_EMBED_COLOR);

    for (rank, entry) in entries.iter().enumerate() {
        let name = fetch_display_name(ctx.http(), serenity::UserId::new(entry.user_id)).await;
        embed = embed.field(
            format!("{}. {}", rank + 1, name),
            format!("XP: {}", entry.xp),
            false,
        );
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
