use poise::serenity_prelude as serenity;
use tracing::{error, warn};

use ember_core::Data;
use ember_database::impls::profiles::record_message;
use ember_database::model::profile::MessageOutcome;

/// Feed one inbound message into the engagement ledger and announce level-ups.
///
/// Runs before command dispatch, so command invocations count toward XP too.
pub async fn handle_message_engagement(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) {
    // Ignore bots and webhooks.
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let outcome = match record_message(&data.db, message.author.id.get()).await {
        Ok(outcome) => outcome,
        Err(source) => {
            error!(?source, "failed to record message engagement");
            return;
        }
    };

    if let MessageOutcome::Updated(update) = outcome
        && update.leveled_up
    {
        let announcement = format!(
            "🎉 <@{}> leveled up to {}!",
            message.author.id.get(),
            update.level
        );
        if let Err(source) = message.channel_id.say(&ctx.http, announcement).await {
            warn!(?source, "failed to announce level-up");
        }
    }
}
