use teloxide::RequestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Attachment download failed: {0}")]
    Download(String),

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("Reply upload failed: {0}")]
    Upload(String),

    #[error("Telegram API error: {0}")]
    Transport(#[from] RequestError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
