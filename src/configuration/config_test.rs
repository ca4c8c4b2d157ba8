use anyhow::Result;

use super::Config;
use super::ConfigKey;
use super::trim_url;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    let doc = toml_res.unwrap();
    assert_eq!(doc["backend"].as_str(), Some("openai"));
    assert_eq!(doc["max-turns"].as_integer(), Some(20));
    assert_eq!(doc["translation"].as_bool(), Some(false));
    assert!(doc.get("config-file").is_none());
    assert!(doc.get("openai-token").is_none());
}

#[test]
fn it_documents_possible_values() {
    let res = Config::serialize_default(cli::build());
    assert!(res.contains("[possible values: en, es, fr, de, zh-cn, ja]"));
    assert!(res.contains("# openai-token = \"\""));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["careconnect", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["careconnect", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[test]
fn it_has_defaults_for_the_chat_session() {
    assert_eq!(Config::default(ConfigKey::Language), "en");
    assert_eq!(Config::default(ConfigKey::MaxTurns), "20");
    assert_eq!(Config::default(ConfigKey::PromptStyle), "conversation");
    assert_eq!(Config::default(ConfigKey::Persona), "🌍 Careconnect");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
}

#[test]
fn it_names_keys_in_kebab_case() {
    assert_eq!(ConfigKey::OpenAiURL.to_string(), "openai-url");
    assert_eq!(ConfigKey::OpenAiToken.to_string(), "openai-token");
    assert_eq!(ConfigKey::OllamaURL.to_string(), "ollama-url");
    assert_eq!(
        ConfigKey::BackendHealthCheckTimeout.to_string(),
        "backend-health-check-timeout"
    );
}

#[test]
fn it_trims_trailing_slashes_from_urls() {
    assert_eq!(trim_url("https://api.openai.com/"), "https://api.openai.com");
    assert_eq!(trim_url("http://localhost:11434//"), "http://localhost:11434");
    assert_eq!(
        trim_url(" https://translate.googleapis.com "),
        "https://translate.googleapis.com"
    );
    assert_eq!(trim_url("https://api.openai.com"), "https://api.openai.com");
}
