use crate::core::{classifier::MediaSource, pipeline};
use crate::errors::BotError;
use log::{error, info, warn};
use teloxide::{Bot, prelude::Message};
use tokio::task;

/// Entry point for matched media messages. Each job runs in its own task so
/// a slow conversion never blocks dispatch for other chats. Failures are
/// logged here and never reach the user.
pub async fn media_handlers(
    bot: Bot,
    message: Message,
    source: MediaSource,
) -> Result<(), BotError> {
    task::spawn(async move {
        info!(
            "Converting {:?} attachment from chat {}",
            source.kind, message.chat.id
        );

        match pipeline::convert_and_reply(&bot, &message, &source).await {
            Ok(()) => {}
            // Usually an expired reference or a file over the API size limit.
            Err(e @ BotError::Download(_)) => warn!("Job aborted: {e}"),
            Err(e) => error!("Job failed: {e}"),
        }
    });

    Ok(())
}
