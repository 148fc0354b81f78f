//! Reply texts sent by the handlers.

/// Sent when storage fails while handling an event.
pub const APOLOGY: &str =
    "Sorry, something went wrong while saving your data. Please try again later.";

pub const HELP: &str = "Available commands:\n\
/start - Start\n\
/help - Help\n\
/stats - Statistics";

/// Longest echo of the user's text in the acknowledgment, in characters.
pub const ACK_PREVIEW_CHARS: usize = 200;

pub fn welcome(display_name: &str) -> String {
    format!(
        "Hello, {}! 👋\nI save every message you send me to a database.\nSend me a message!",
        display_name
    )
}

pub fn stats(count: i64) -> String {
    format!("You have sent {} messages.", count)
}

pub fn message_saved(text: &str) -> String {
    format!("Message saved: '{}'", preview(text, ACK_PREVIEW_CHARS))
}

pub fn unknown_command(name: &str) -> String {
    format!(
        "Unknown command /{}. Send /help to see available commands.",
        name
    )
}

/// Truncates `text` to at most `max_chars` characters, appending `…` when cut.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
