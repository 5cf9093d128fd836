use crate::core::classifier::MediaSource;
use crate::core::converter::convert_to_voice;
use crate::core::workspace::JobWorkspace;
use crate::errors::BotError;
use log::{debug, info};
use std::path::Path;
use teloxide::net::Download;
use teloxide::payloads::SendVoiceSetters;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ReplyParameters};

/// Runs one conversion job: download the attachment, transcode it to a voice
/// note, reply with the result. Exactly one reply is sent on success, none on
/// failure. The workspace is reclaimed on every exit path.
pub async fn convert_and_reply(
    bot: &Bot,
    message: &Message,
    source: &MediaSource,
) -> Result<(), BotError> {
    let workspace = JobWorkspace::new()?;
    let input = workspace.input_path();
    let output = workspace.output_path();

    download_attachment(bot, source, &input).await?;
    convert_to_voice(&input, &output).await?;

    bot.send_voice(message.chat.id, InputFile::file(output))
        .reply_parameters(ReplyParameters::new(message.id))
        .await
        .map_err(|e| BotError::Upload(e.to_string()))?;

    info!("Replied with a voice note in chat {}", message.chat.id);
    Ok(())
}

async fn download_attachment(
    bot: &Bot,
    source: &MediaSource,
    dest: &Path,
) -> Result<(), BotError> {
    let file = bot
        .get_file(source.file_id.clone())
        .await
        .map_err(|e| BotError::Download(e.to_string()))?;
    debug!("Downloading {} ({} bytes)", file.path, file.meta.size);

    let mut dst = tokio::fs::File::create(dest).await?;
    bot.download_file(&file.path, &mut dst)
        .await
        .map_err(|e| BotError::Download(e.to_string()))?;

    Ok(())
}
