//! Bot command parsing.
//!
//! A command is the first whitespace-separated token of the message when it starts with `/`,
//! optionally addressed as `/name@bot_username`. Names are matched case-insensitively and any
//! arguments after the first token are ignored.

/// Parsed command of an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Stats,
    /// A `/word` this bot does not know; carries the lowercased name.
    Unknown(String),
    /// `/name@other_bot`: a command addressed to a different bot in the same chat.
    ForOtherBot,
}

impl Command {
    /// Parses `text`; returns `None` when it is not a command at all.
    ///
    /// `bot_username` is the bot's own username (without `@`) when known; if it is unknown every
    /// `@target` suffix is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Command> {
        let token = text.trim_start().split_whitespace().next()?;
        let body = token.strip_prefix('/')?;

        let (name, target) = match body.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (body, None),
        };
        if name.is_empty() {
            return None;
        }

        if let (Some(target), Some(me)) = (target, bot_username) {
            if !target.eq_ignore_ascii_case(me) {
                return Some(Command::ForOtherBot);
            }
        }

        let name = name.to_lowercase();
        Some(match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "stats" => Command::Stats,
            _ => Command::Unknown(name),
        })
    }

    /// True if `text` looks like a command (`/` followed by a name).
    pub fn is_command(text: &str) -> bool {
        Self::parse(text, None).is_some()
    }
}
