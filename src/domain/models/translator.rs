use anyhow::Result;
use async_trait::async_trait;

use super::Language;

#[async_trait]
pub trait Translator {
    /// Translates `text` in to `destination`. The source language is detected
    /// by the service.
    async fn translate(&self, text: &str, destination: Language) -> Result<String>;
}

pub type TranslatorBox = Box<dyn Translator + Send + Sync>;
