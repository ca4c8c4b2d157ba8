#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

use super::DialectNormalizer;
use super::PromptBuilder;
use crate::domain::models::BackendBox;
use crate::domain::models::ChatError;
use crate::domain::models::Conversation;
use crate::domain::models::Language;
use crate::domain::models::Message;
use crate::domain::models::TranslatorBox;
use crate::domain::models::DEFAULT_MAX_TURNS;

/// Result of one orchestrator pass.
#[derive(Debug)]
pub struct Turn {
    pub conversation: Conversation,
    pub reply: Result<String, ChatError>,
}

impl Turn {
    /// Text to show the user, either the assistant reply or the error.
    pub fn display_text(&self) -> String {
        match &self.reply {
            Ok(text) => return text.to_string(),
            Err(err) => return err.to_string(),
        }
    }
}

/// Rejects an empty analysis question before anything reaches the network.
pub fn validate_question(question: &str) -> Result<(), ChatError> {
    if question.trim().is_empty() {
        return Err(ChatError::Validation(
            "Please enter a question before requesting a detailed analysis.".to_string(),
        ));
    }

    return Ok(());
}

pub struct ResponseOrchestrator {
    backend: BackendBox,
    translator: Option<TranslatorBox>,
    normalizer: Option<DialectNormalizer>,
    prompt_builder: PromptBuilder,
    max_turns: usize,
}

impl ResponseOrchestrator {
    pub fn new(backend: BackendBox, prompt_builder: PromptBuilder) -> ResponseOrchestrator {
        return ResponseOrchestrator {
            backend,
            translator: None,
            normalizer: None,
            prompt_builder,
            max_turns: DEFAULT_MAX_TURNS,
        };
    }

    pub fn with_translator(mut self, translator: TranslatorBox) -> ResponseOrchestrator {
        self.translator = Some(translator);
        return self;
    }

    pub fn with_normalizer(mut self, normalizer: DialectNormalizer) -> ResponseOrchestrator {
        self.normalizer = Some(normalizer);
        return self;
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> ResponseOrchestrator {
        self.max_turns = max_turns;
        return self;
    }

    pub fn translation_enabled(&self) -> bool {
        return self.translator.is_some();
    }

    async fn translate_inbound(&self, text: &str) -> Result<String, ChatError> {
        if let Some(translator) = &self.translator {
            return translator
                .translate(text, Language::En)
                .await
                .map_err(ChatError::Translation);
        }

        return Ok(text.to_string());
    }

    async fn translate_outbound(&self, text: &str, language: Language) -> Result<String, ChatError> {
        if let Some(translator) = &self.translator {
            if !language.is_english() {
                return translator
                    .translate(text, language)
                    .await
                    .map_err(ChatError::Translation);
            }
        }

        return Ok(text.to_string());
    }

    fn normalize(&self, text: &str) -> String {
        if let Some(normalizer) = &self.normalizer {
            return normalizer.normalize(text);
        }

        return text.to_string();
    }

    /// Translation and dialect normalization applied to anything a user types.
    async fn prepare_input(&self, raw_input: &str) -> Result<String, ChatError> {
        let translated = self.translate_inbound(raw_input).await?;
        return Ok(self.normalize(&translated));
    }

    /// Runs the prompt against the backend and appends the reply. The user
    /// message is expected to already be part of `conversation`, and is kept
    /// even when the backend or the reply translation fails.
    async fn complete(
        &self,
        mut conversation: Conversation,
        prompt: String,
        language: Language,
    ) -> Turn {
        tracing::debug!(prompt = %prompt, "sending prompt");

        let reply = match self.backend.get_completion(&prompt).await {
            Ok(text) => self.translate_outbound(&text, language).await,
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    backend = %self.backend.name(),
                    "completion request failed"
                );
                Err(ChatError::Completion(err))
            }
        };

        if let Ok(text) = &reply {
            conversation.append(Message::assistant(text));
        }
        conversation.truncate(self.max_turns);

        return Turn {
            conversation,
            reply,
        };
    }

    pub async fn handle_turn(
        &self,
        mut conversation: Conversation,
        raw_input: &str,
        language: Language,
    ) -> Turn {
        let input = match self.prepare_input(raw_input).await {
            Ok(input) => input,
            Err(err) => {
                return Turn {
                    conversation,
                    reply: Err(err),
                };
            }
        };

        conversation.append(Message::user(&input));
        let prompt = self.prompt_builder.build_for_turn(&conversation);

        return self.complete(conversation, prompt, language).await;
    }

    pub async fn handle_analysis(
        &self,
        mut conversation: Conversation,
        question: &str,
        language: Language,
    ) -> Turn {
        if let Err(err) = validate_question(question) {
            return Turn {
                conversation,
                reply: Err(err),
            };
        }

        let question = match self.prepare_input(question.trim()).await {
            Ok(question) => question,
            Err(err) => {
                return Turn {
                    conversation,
                    reply: Err(err),
                };
            }
        };

        let prompt = self.prompt_builder.build_analysis(&conversation, &question);
        conversation.append(Message::user(&question));

        return self.complete(conversation, prompt, language).await;
    }
}
