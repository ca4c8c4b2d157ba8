#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::mem;

use strum::IntoEnumIterator;

use super::ResponseOrchestrator;
use super::Turn;
use crate::domain::models::Language;
use crate::domain::models::Session;
use crate::domain::models::SlashCommand;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /analyze (/a) [QUESTION] - Requests a detailed analysis of a question, using the conversation so far as context.
- /language (/l) [CODE?] - Sets the language you chat in. Without a CODE, lists all supported languages.
- /history (/hi) - Prints the remembered conversation.
- /quit /exit (/q) - Exit Careconnect.
- /help (/h) - Provides this help menu.

Any other text is sent to the assistant as a new message.
        "#;

    return text.trim().to_string();
}

/// What the front-end should show after handling a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum AppOutput {
    Nothing,
    Quit,
    Info(String),
    Reply(String),
    Warning(String),
    Error(String),
}

pub struct AppState {
    pub session: Session,
    orchestrator: ResponseOrchestrator,
}

impl AppState {
    pub fn new(orchestrator: ResponseOrchestrator, language: Language) -> AppState {
        return AppState {
            session: Session::new(language),
            orchestrator,
        };
    }

    pub async fn handle_input(&mut self, text: &str) -> AppOutput {
        if text.trim().is_empty() {
            return AppOutput::Nothing;
        }

        if let Some(command) = SlashCommand::parse(text) {
            if command.is_quit() {
                return AppOutput::Quit;
            }
            if command.is_help() {
                return AppOutput::Info(help_text());
            }
            if command.is_history() {
                return AppOutput::Info(self.history());
            }
            if command.is_language() {
                return self.select_language(&command);
            }
            if command.is_analyze() {
                return self.analyze(&command.rest()).await;
            }
        }

        return self.chat(text.trim()).await;
    }

    pub async fn chat(&mut self, text: &str) -> AppOutput {
        let conversation = mem::take(&mut self.session.conversation);
        let turn = self
            .orchestrator
            .handle_turn(conversation, text, self.session.language)
            .await;

        return self.apply(turn);
    }

    pub async fn analyze(&mut self, question: &str) -> AppOutput {
        let conversation = mem::take(&mut self.session.conversation);
        let turn = self
            .orchestrator
            .handle_analysis(conversation, question, self.session.language)
            .await;

        return self.apply(turn);
    }

    fn apply(&mut self, turn: Turn) -> AppOutput {
        let output = match &turn.reply {
            Ok(text) => AppOutput::Reply(text.to_string()),
            Err(err) if err.is_validation() => AppOutput::Warning(turn.display_text()),
            Err(_) => AppOutput::Error(turn.display_text()),
        };

        tracing::debug!(
            session = %self.session.id,
            messages = turn.conversation.len(),
            success = turn.reply.is_ok(),
            "turn finished"
        );
        self.session.conversation = turn.conversation;

        return output;
    }

    fn history(&self) -> String {
        if self.session.conversation.is_empty() {
            return "There are no messages yet.".to_string();
        }

        return self
            .session
            .conversation
            .messages()
            .iter()
            .map(|message| return message.as_prompt_line())
            .collect::<Vec<String>>()
            .join("\n");
    }

    fn select_language(&mut self, command: &SlashCommand) -> AppOutput {
        if command.args.is_empty() {
            let current = self.session.language;
            let res = Language::iter()
                .map(|language| {
                    let marker = if language == current { " (current)" } else { "" };
                    return format!("- {language} - {}{marker}", language.display_name());
                })
                .collect::<Vec<String>>();

            return AppOutput::Info(res.join("\n"));
        }

        let code = &command.args[0];
        if let Some(language) = Language::parse(code) {
            self.session.select_language(language);
            let mut res = format!("Now chatting in {}.", language.display_name());
            if !self.orchestrator.translation_enabled() && !language.is_english() {
                res += " Translation is disabled, so messages are sent as typed.";
            }
            return AppOutput::Info(res);
        }

        return AppOutput::Error(format!(
            "{code} is not a supported language. Run `/language` to list them."
        ));
    }
}
