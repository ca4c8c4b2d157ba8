#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::anyhow;
use anyhow::Error;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::application::cli;
use crate::application::cli::StartMode;
use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendName;
use crate::domain::models::Language;
use crate::domain::models::PromptStyle;
use crate::domain::services::AppState;
use crate::domain::services::DialectNormalizer;
use crate::domain::services::PromptBuilder;
use crate::domain::services::ResponseOrchestrator;
use crate::infrastructure::backends::BackendManager;
use crate::infrastructure::translators::TranslatorManager;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        format!(
            "Oh no! Careconnect has failed with the following app version and error.\n\nVersion: {}\nError: {:#}",
            env!("CARGO_PKG_VERSION"),
            err
        )
        .red()
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

async fn build_app_state() -> Result<AppState> {
    let backend_name = BackendName::parse(Config::get(ConfigKey::Backend))
        .ok_or_else(|| return anyhow!("Unknown backend {}", Config::get(ConfigKey::Backend)))?;
    let backend = BackendManager::get(backend_name);
    backend.health_check().await?;

    let style = Config::get(ConfigKey::PromptStyle)
        .parse::<PromptStyle>()
        .map_err(|_| {
            return anyhow!(
                "Unknown prompt style {}",
                Config::get(ConfigKey::PromptStyle)
            );
        })?;
    let language = Language::parse(&Config::get(ConfigKey::Language))
        .ok_or_else(|| return anyhow!("Unknown language {}", Config::get(ConfigKey::Language)))?;

    let mut orchestrator = ResponseOrchestrator::new(
        backend,
        PromptBuilder::new(&Config::get(ConfigKey::Persona), style),
    )
    .with_max_turns(Config::max_turns()?);

    if Config::get_bool(ConfigKey::DialectNormalization) {
        orchestrator = orchestrator.with_normalizer(DialectNormalizer::default());
    }
    if Config::get_bool(ConfigKey::Translation) {
        orchestrator = orchestrator.with_translator(TranslatorManager::get());
    }

    return Ok(AppState::new(orchestrator, language));
}

/// Runs the selected mode. `Ok(false)` means a one-shot command printed an
/// error and the process should exit non-zero.
async fn run(mode: StartMode) -> Result<bool> {
    let persona = Config::get(ConfigKey::Persona);
    if let Some(output) = ui::answer_without_backend(&mode) {
        return Ok(ui::print_once(&output, &persona));
    }

    let app_state = build_app_state().await?;

    tracing::debug!(session = %app_state.session.id, mode = ?mode, "session started");
    if mode == StartMode::Chat {
        ui::start(app_state, &persona).await?;
        return Ok(true);
    }

    return Ok(ui::run_once(app_state, mode, &persona).await);
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let debug_log_dir = env::var("CARECONNECT_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("careconnect")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("careconnect")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let mode = match cli::parse().await {
        Ok(mode) => mode,
        Err(err) => {
            handle_error(err);
            return;
        }
    };
    if mode == StartMode::Exit {
        return;
    }

    match run(mode).await {
        Ok(true) => {}
        Ok(false) => {
            drop(guard);
            process::exit(1);
        }
        Err(err) => handle_error(err),
    }

    drop(guard);
}
