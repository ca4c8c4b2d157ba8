#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use uuid::Uuid;

use super::Conversation;
use super::Language;

/// State owned by a single chat session. Nothing here is shared between
/// sessions.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub conversation: Conversation,
    pub language: Language,
}

impl Session {
    pub fn new(language: Language) -> Session {
        return Session {
            id: Session::create_id(),
            conversation: Conversation::new(),
            language,
        };
    }

    pub fn create_id() -> String {
        return Uuid::new_v4()
            .to_string()
            .split('-')
            .take(2)
            .collect::<Vec<&str>>()
            .join("-");
    }

    pub fn select_language(&mut self, language: Language) {
        tracing::debug!(session = %self.id, language = %language, "language selected");
        self.language = language;
    }
}
