use log::LevelFilter;
use teloxide::Bot;

/// Process-wide configuration. Built once in `main`, read-only afterwards.
#[derive(Clone)]
pub struct Config {
    bot: Bot,
    #[allow(dead_code)]
    verbosity: LevelFilter,
}

impl Config {
    pub fn new(token: String, verbosity: LevelFilter) -> Self {
        Config {
            bot: Bot::new(token),
            verbosity,
        }
    }

    pub fn get_bot(&self) -> &Bot {
        &self.bot
    }

    #[allow(dead_code)]
    pub fn verbosity(&self) -> LevelFilter {
        self.verbosity
    }
}
