mod bot;
mod config;
mod core;
mod errors;

use crate::config::Config;
use clap::Parser;
use log::{LevelFilter, error, info};
use std::path::PathBuf;

/// Converts files to voice messages as a Telegram bot.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Telegram API token
    #[arg(short, long, value_name = "API_TOKEN", conflicts_with = "token_file")]
    token: Option<String>,

    /// Path to a file containing the Telegram API token
    #[arg(short = 'f', long, value_name = "PATH")]
    token_file: Option<PathBuf>,

    /// Enable debug verbosity
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Be less verbose
    #[arg(short, long)]
    quiet: bool,
}

/// Token precedence: --token, then --token-file, then the BOT_TOKEN env var.
fn resolve_token(args: &Args) -> Option<String> {
    if let Some(token) = &args.token {
        return Some(token.clone());
    }

    if let Some(path) = &args.token_file {
        return match std::fs::read_to_string(path) {
            Ok(contents) => Some(contents.trim().to_owned()),
            Err(e) => {
                error!("Failed to read token file {}: {}", path.display(), e);
                None
            }
        };
    }

    std::env::var("BOT_TOKEN").ok()
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let verbosity = if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();

    let Some(token) = resolve_token(&args).filter(|t| !t.is_empty()) else {
        error!("No API token: pass --token, --token-file or set BOT_TOKEN");
        std::process::exit(1);
    };

    let config = Config::new(token, verbosity);

    info!("Bot starting...");
    match bot::dispatcher::run(&config).await {
        Ok(()) => info!("Bot stopped"),
        Err(e) => {
            error!("Bot stopped with error: {e}");
            std::process::exit(1);
        }
    }
}
