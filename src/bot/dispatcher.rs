use crate::{
    bot::{
        commander::{Command, command_handlers},
        messager::media_handlers,
    },
    config::Config,
    core::classifier::classify,
    errors::BotError,
};
use log::{debug, info};
use teloxide::{
    dispatching::{Dispatcher, HandlerExt, UpdateFilterExt},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::{Message, Requester},
    types::Update,
    update_listeners::Polling,
    utils::command::BotCommands,
};

pub async fn run(config: &Config) -> Result<(), BotError> {
    let bot = config.get_bot().clone();

    bot.set_my_commands(Command::bot_commands()).await?;
    let me = bot.get_me().await?;
    info!("Running as @{}", me.username());

    let handlers = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handlers),
        )
        .branch(
            Update::filter_message()
                .filter_map(|message: Message| classify(&message))
                .endpoint(media_handlers),
        );

    // Drop updates queued while the bot was offline so a restart never
    // replays stale media messages.
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handlers)
        .default_handler(|update| async move {
            debug!("Ignoring unsupported update {:?}", update.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("Handler error"))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("Update listener error"),
        )
        .await;

    Ok(())
}
