#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;

#[derive(PartialEq, Eq, Clone, Copy, Debug, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendName {
    OpenAI,
    Ollama,
}

impl BackendName {
    pub fn parse(text: String) -> Option<BackendName> {
        if text == "openai" {
            return Some(BackendName::OpenAI);
        }
        if text == "ollama" {
            return Some(BackendName::Ollama);
        }

        return None;
    }
}

#[async_trait]
pub trait Backend {
    fn name(&self) -> BackendName;

    /// Used at startup to verify all configurations are available to work with
    /// the backend.
    async fn health_check(&self) -> Result<()>;

    /// Sends a fully rendered prompt and waits for the whole generated text.
    async fn get_completion(&self, prompt: &str) -> Result<String>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
