//! # Handlers for the message-log bot
//!
//! Handler implementations plugged into the handler chain:
//!
//! - [`CommandHandler`] – `/start`, `/help`, `/stats` (and a hint for unknown commands)
//! - [`PersistenceHandler`] – stores plain text messages and acknowledges them
//! - [`LoggingHandler`] – logs inbound messages and final responses
//!
//! Storage failures never escape a handler: they become the apology reply (or a dropped event for
//! referential violations), see [`replies`].

mod command;
mod command_handler;
mod failure;
mod logging;
mod persistence_handler;
pub mod replies;

#[cfg(test)]
mod test;

pub use command::Command;
pub use command_handler::CommandHandler;
pub use logging::LoggingHandler;
pub use persistence_handler::PersistenceHandler;
