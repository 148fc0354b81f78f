//! CLI parser.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "message-log-bot")]
#[command(about = "Telegram bot that logs messages to SQLite", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot token; overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN.
    #[arg(short, long)]
    pub token: Option<String>,
}
