#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Role;

/// A single chat entry. Messages are never edited after creation, the only
/// way to change history is to append or truncate a `Conversation`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Message {
        return Message {
            role,
            content: content.to_string(),
        };
    }

    pub fn user(content: &str) -> Message {
        return Message::new(Role::User, content);
    }

    pub fn assistant(content: &str) -> Message {
        return Message::new(Role::Assistant, content);
    }

    pub fn role(&self) -> Role {
        return self.role;
    }

    pub fn content(&self) -> &str {
        return &self.content;
    }

    /// Renders the message the way it appears inside a prompt.
    pub fn as_prompt_line(&self) -> String {
        return format!("{}: {}", self.role, self.content);
    }
}
