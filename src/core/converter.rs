use crate::errors::BotError;
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;

fn ffmpeg_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-loglevel".into(),
        "quiet".into(),
        "-i".into(),
        input.as_os_str().to_owned(),
        "-acodec".into(),
        "libopus".into(),
        output.as_os_str().to_owned(),
    ]
}

/// Transcodes `input` to an Opus voice note at `output` by running ffmpeg.
///
/// A spawn failure, a nonzero exit, or a missing/empty output file all count
/// as a conversion failure.
pub async fn convert_to_voice(input: &Path, output: &Path) -> Result<(), BotError> {
    let status = Command::new("ffmpeg")
        .args(ffmpeg_args(input, output))
        .status()
        .await
        .map_err(|e| BotError::Conversion(format!("failed to spawn ffmpeg: {e}")))?;

    if !status.success() {
        return Err(BotError::Conversion(format!("ffmpeg exited with {status}")));
    }

    match tokio::fs::metadata(output).await {
        Ok(meta) if meta.len() > 0 => Ok(()),
        _ => Err(BotError::Conversion("ffmpeg produced no output".to_owned())),
    }
}
