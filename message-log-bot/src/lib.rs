//! # message-log-bot
//!
//! Wires storage, handlers, the handler chain and the Telegram runner. Loads config from env and
//! runs long polling until the process is stopped.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::Cli;
pub use config::BotConfig;
pub use runner::{build_handler_chain, run_bot};
