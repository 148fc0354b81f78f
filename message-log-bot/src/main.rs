//! Binary entry point: load `.env`, init logging, parse CLI, load config, run the bot.

use anyhow::Result;
use clap::Parser;
use dbot_core::init_tracing;
use message_log_bot::{run_bot, BotConfig, Cli};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&BotConfig::log_file_from_env())?;

    let config = match BotConfig::load(cli.token).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load config");
            return Err(e.into());
        }
    };

    run_bot(config).await
}
