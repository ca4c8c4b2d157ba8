#[cfg(test)]
#[path = "prompt_builder_test.rs"]
mod tests;

use crate::domain::models::Conversation;
use crate::domain::models::PromptStyle;

/// Renders conversations in to the plain text prompts sent to a completion
/// backend. Output only depends on the inputs.
#[derive(Clone, Debug)]
pub struct PromptBuilder {
    persona: String,
    style: PromptStyle,
}

impl PromptBuilder {
    pub fn new(persona: &str, style: PromptStyle) -> PromptBuilder {
        return PromptBuilder {
            persona: persona.to_string(),
            style,
        };
    }

    fn framing(&self) -> String {
        return format!("You are {}, a helpful assistant.", self.persona);
    }

    fn history(conversation: &Conversation) -> String {
        return conversation
            .messages()
            .iter()
            .map(|message| return message.as_prompt_line())
            .collect::<Vec<String>>()
            .join("\n");
    }

    /// Prompt for the next chat reply, using the configured style. The latest
    /// user message is expected to already be part of `conversation`.
    pub fn build_for_turn(&self, conversation: &Conversation) -> String {
        match self.style {
            PromptStyle::Conversation => return self.build(conversation),
            PromptStyle::SingleTurn => {
                let input = conversation.last_user_content().unwrap_or_default();
                return self.build_single_turn(input);
            }
        }
    }

    pub fn build(&self, conversation: &Conversation) -> String {
        let mut sections: Vec<String> = vec![];

        let history = PromptBuilder::history(conversation);
        if !history.is_empty() {
            sections.push(history);
        }

        if let Some(latest) = conversation.last_user_content() {
            sections.push(format!("The user said: {latest}"));
        }

        sections.push(format!(
            "{} Respond to the latest user message, taking the conversation above in to account.",
            self.framing()
        ));

        return sections.join("\n");
    }

    pub fn build_single_turn(&self, input: &str) -> String {
        return format!(
            "{} The user said: {input}. Respond accordingly.",
            self.framing()
        );
    }

    pub fn build_analysis(&self, conversation: &Conversation, question: &str) -> String {
        let mut sections = vec![format!(
            "{} Provide a detailed analysis of the question below. Explain the relevant background, walk through the important considerations step by step, and finish with a clear conclusion.",
            self.framing()
        )];

        let history = PromptBuilder::history(conversation);
        if !history.is_empty() {
            sections.push(format!("Conversation so far:\n{history}"));
        }

        sections.push(format!("Question: {question}"));

        return sections.join("\n\n");
    }
}
