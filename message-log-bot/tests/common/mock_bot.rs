//! Recording [`dbot_core::Bot`] for end-to-end scenario tests.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, Result};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<(i64, String)>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts sent so far, in order.
    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts().pop()
    }

    pub fn chat_ids(&self) -> Vec<i64> {
        self.sent.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}
