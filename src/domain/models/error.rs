use thiserror::Error;

/// Everything that can go wrong during a turn. All variants end up as a
/// message shown to the user, none of them stop the session.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("The completion backend failed with the following error: {0:#}")]
    Completion(anyhow::Error),
    #[error("The translation service failed with the following error: {0:#}")]
    Translation(anyhow::Error),
    #[error("{0}")]
    Validation(String),
}

impl ChatError {
    pub fn is_validation(&self) -> bool {
        return matches!(self, ChatError::Validation(_));
    }
}
