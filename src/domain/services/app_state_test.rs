use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use super::help_text;
use super::AppOutput;
use super::AppState;
use crate::domain::models::Backend;
use crate::domain::models::BackendName;
use crate::domain::models::Language;
use crate::domain::models::Message;
use crate::domain::models::PromptStyle;
use crate::domain::services::PromptBuilder;
use crate::domain::services::ResponseOrchestrator;

struct EchoBackend {
    fail: bool,
}

#[async_trait]
impl Backend for EchoBackend {
    fn name(&self) -> BackendName {
        return BackendName::Ollama;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn get_completion(&self, prompt: &str) -> Result<String> {
        if self.fail {
            bail!("connection refused");
        }

        let last_line = prompt.lines().last().unwrap_or_default();
        return Ok(format!("echo {}", last_line.len()));
    }
}

fn app_state(fail: bool) -> AppState {
    let orchestrator = ResponseOrchestrator::new(
        Box::new(EchoBackend { fail }),
        PromptBuilder::new("🌍 Careconnect", PromptStyle::SingleTurn),
    );

    return AppState::new(orchestrator, Language::En);
}

#[tokio::test]
async fn it_ignores_blank_lines() {
    let mut state = app_state(false);
    assert_eq!(state.handle_input("   ").await, AppOutput::Nothing);
    assert!(state.session.conversation.is_empty());
}

#[tokio::test]
async fn it_quits() {
    let mut state = app_state(false);
    assert_eq!(state.handle_input("/q").await, AppOutput::Quit);
    assert_eq!(state.handle_input("/exit").await, AppOutput::Quit);
}

#[tokio::test]
async fn it_shows_help() {
    let mut state = app_state(false);
    assert_eq!(state.handle_input("/help").await, AppOutput::Info(help_text()));
}

#[tokio::test]
async fn it_chats() {
    let mut state = app_state(false);
    let output = state.handle_input("  Hello  ").await;

    assert!(matches!(output, AppOutput::Reply(text) if text.starts_with("echo ")));
    assert_eq!(state.session.conversation.len(), 2);
    assert_eq!(state.session.conversation.messages()[0], Message::user("Hello"));
}

#[tokio::test]
async fn it_reports_backend_errors() {
    let mut state = app_state(true);
    let output = state.handle_input("Hello").await;

    assert!(matches!(output, AppOutput::Error(text) if text.contains("connection refused")));
    assert_eq!(state.session.conversation.messages(), &[Message::user("Hello")]);
}

#[tokio::test]
async fn it_warns_on_empty_analysis() {
    let mut state = app_state(false);
    let output = state.handle_input("/analyze").await;

    assert_eq!(
        output,
        AppOutput::Warning(
            "Please enter a question before requesting a detailed analysis.".to_string()
        )
    );
    assert!(state.session.conversation.is_empty());
}

#[tokio::test]
async fn it_analyzes() {
    let mut state = app_state(false);
    let output = state.handle_input("/a why is water wet").await;

    assert!(matches!(output, AppOutput::Reply(_)));
    assert_eq!(
        state.session.conversation.messages()[0],
        Message::user("why is water wet")
    );
}

#[tokio::test]
async fn it_prints_history() {
    let mut state = app_state(false);
    assert_eq!(
        state.handle_input("/history").await,
        AppOutput::Info("There are no messages yet.".to_string())
    );

    state.handle_input("Hello").await;
    let output = state.handle_input("/hi").await;
    assert!(matches!(output, AppOutput::Info(text) if text.starts_with("user: Hello\nassistant: echo ")));
}

#[tokio::test]
async fn it_lists_languages() {
    let mut state = app_state(false);
    let output = state.handle_input("/language").await;

    insta::assert_debug_snapshot!(output, @r###"
    Info(
        "- en - English (current)\n- es - Spanish\n- fr - French\n- de - German\n- zh-cn - Chinese (Simplified)\n- ja - Japanese",
    )
    "###);
}

#[tokio::test]
async fn it_selects_languages() {
    let mut state = app_state(false);
    let output = state.handle_input("/l fr").await;

    assert_eq!(
        output,
        AppOutput::Info(
            "Now chatting in French. Translation is disabled, so messages are sent as typed."
                .to_string()
        )
    );
    assert_eq!(state.session.language, Language::Fr);
}

#[tokio::test]
async fn it_rejects_unknown_languages() {
    let mut state = app_state(false);
    let output = state.handle_input("/l klingon").await;

    assert_eq!(
        output,
        AppOutput::Error(
            "klingon is not a supported language. Run `/language` to list them.".to_string()
        )
    );
    assert_eq!(state.session.language, Language::En);
}
