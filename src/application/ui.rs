#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::io;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;

use super::cli::StartMode;
use crate::domain::services::AppOutput;
use crate::domain::services::AppState;
use crate::domain::services::validate_question;

pub fn greeting(persona: &str) -> String {
    return format!("Hello! I'm {persona}. How can I assist you today?");
}

/// Renders an output for the terminal. `None` means nothing is printed.
pub fn format_output(output: &AppOutput, persona: &str) -> Option<String> {
    match output {
        AppOutput::Nothing | AppOutput::Quit => return None,
        AppOutput::Info(text) => return Some(text.to_string()),
        AppOutput::Reply(text) => return Some(format!("{}: {text}", persona.green().bold())),
        AppOutput::Warning(text) => return Some(text.yellow().to_string()),
        AppOutput::Error(text) => return Some(text.red().to_string()),
    }
}

fn print_prompt() -> Result<()> {
    print!("{} ", ">".cyan().bold());
    std::io::stdout().flush()?;
    return Ok(());
}

/// Reads one line per turn from stdin until EOF or `/quit`.
pub async fn start(mut app_state: AppState, persona: &str) -> Result<()> {
    println!("{}", greeting(persona).bold());
    println!("{}", "Type /help to list commands.".dimmed());

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print_prompt()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        let output = app_state.handle_input(&line).await;
        if output == AppOutput::Quit {
            break;
        }
        if let Some(text) = format_output(&output, persona) {
            println!("{text}\n");
        }
    }

    tracing::debug!(session = %app_state.session.id, "chat ended");
    return Ok(());
}

/// Answers one-shot modes that are settled without a backend, such as an
/// `analyze` with an empty question.
pub fn answer_without_backend(mode: &StartMode) -> Option<AppOutput> {
    if let StartMode::Analyze(question) = mode {
        if let Err(err) = validate_question(question) {
            return Some(AppOutput::Warning(err.to_string()));
        }
    }

    return None;
}

/// Prints the output of a one-shot command. Errors go to stderr and return
/// false so the process can exit non-zero.
pub fn print_once(output: &AppOutput, persona: &str) -> bool {
    let text = match format_output(output, persona) {
        Some(text) => text,
        None => return true,
    };

    if let AppOutput::Error(_) = output {
        eprintln!("{text}");
        return false;
    }

    println!("{text}");
    return true;
}

/// Handles the `ask` and `analyze` commands, which run a single turn.
pub async fn run_once(mut app_state: AppState, mode: StartMode, persona: &str) -> bool {
    let output = match mode {
        StartMode::Ask(text) => app_state.chat(&text).await,
        StartMode::Analyze(question) => app_state.analyze(&question).await,
        _ => return true,
    };

    return print_once(&output, persona);
}
