#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Message;
use super::Role;

pub const DEFAULT_MAX_TURNS: usize = 20;

/// Ordered chat history for one session, oldest message first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Conversation {
        return Conversation::default();
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Keeps only the last `max_len` messages.
    pub fn truncate(&mut self, max_len: usize) {
        if self.messages.len() <= max_len {
            return;
        }

        let overflow = self.messages.len() - max_len;
        self.messages.drain(..overflow);
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }

    pub fn last_user_content(&self) -> Option<&str> {
        return self
            .messages
            .iter()
            .rev()
            .find(|message| return message.role() == Role::User)
            .map(|message| return message.content());
    }
}
