use crate::errors::BotError;
use teloxide::{
    Bot,
    macros::BotCommands,
    payloads::SendMessageSetters,
    prelude::{Message, Requester},
    types::ReplyParameters,
};

const USAGE_TEXT: &str =
    "Send me a voice message, video, video note or audio file and I will reply with a voice note.";

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "what this bot does")]
    Start,
    #[command(description = "show usage instructions")]
    Help,
}

pub async fn command_handlers(bot: Bot, message: Message, cmd: Command) -> Result<(), BotError> {
    match cmd {
        Command::Start | Command::Help => {
            bot.send_message(message.chat.id, USAGE_TEXT)
                .reply_parameters(ReplyParameters::new(message.id))
                .await?;
        }
    }
    Ok(())
}
