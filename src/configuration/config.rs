#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::BackendName;
use crate::domain::models::Language;
use crate::domain::models::PromptStyle;
use crate::domain::models::DEFAULT_MAX_TURNS;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

fn trim_url(url: &str) -> String {
    return url.trim().trim_end_matches('/').to_string();
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    Backend,
    BackendHealthCheckTimeout,
    ConfigFile,
    DialectNormalization,
    Language,
    MaxTurns,
    Model,
    OllamaURL,
    #[strum(serialize = "openai-token")]
    OpenAiToken,
    #[strum(serialize = "openai-url")]
    OpenAiURL,
    Persona,
    PromptStyle,
    TranslateURL,
    Translation,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Base URLs without a trailing slash, so paths can be appended as-is.
    pub fn get_url(key: ConfigKey) -> String {
        return trim_url(&Config::get(key));
    }

    pub fn get_bool(key: ConfigKey) -> bool {
        return ["true", "1", "yes", "on"].contains(&Config::get(key).to_lowercase().as_str());
    }

    pub fn max_turns() -> Result<usize> {
        let raw = Config::get(ConfigKey::MaxTurns);
        match raw.parse::<usize>() {
            Ok(val) if val > 0 => return Ok(val),
            _ => bail!(format!(
                "'{raw}' is not a valid value for {}, it must be a positive number",
                ConfigKey::MaxTurns
            )),
        }
    }

    pub fn config_file_path() -> path::PathBuf {
        return dirs::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("careconnect/config.toml");
    }

    pub fn default(key: ConfigKey) -> String {
        let default_max_turns = DEFAULT_MAX_TURNS.to_string();
        let config_path = Config::config_file_path().to_string_lossy().to_string();

        let res = match key {
            ConfigKey::Backend => BackendName::OpenAI.to_string(),
            ConfigKey::BackendHealthCheckTimeout => "1000".to_string(),
            ConfigKey::DialectNormalization => "true".to_string(),
            ConfigKey::Language => Language::default().to_string(),
            ConfigKey::MaxTurns => default_max_turns,
            ConfigKey::Model => "".to_string(),
            ConfigKey::OllamaURL => "http://localhost:11434".to_string(),
            ConfigKey::OpenAiToken => "".to_string(),
            ConfigKey::OpenAiURL => "https://api.openai.com".to_string(),
            ConfigKey::Persona => "🌍 Careconnect".to_string(),
            ConfigKey::PromptStyle => PromptStyle::default().to_string(),
            ConfigKey::TranslateURL => "https://translate.googleapis.com".to_string(),
            ConfigKey::Translation => "false".to_string(),

            // Special
            ConfigKey::ConfigFile => config_path,
        };

        return res;
    }

    fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
        let long = key.to_string();
        if let Some(arg) = cmd
            .get_arguments()
            .find(|e| return e.get_long() == Some(long.as_str()))
        {
            return arg
                .get_possible_values()
                .iter()
                .map(|e| return e.get_name().to_string())
                .collect::<Vec<String>>();
        }

        return vec![];
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap value parsers to do validation.
                    let possible_values = Config::possible_values(&cmd, key);

                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_bool) = val.as_bool() {
                        Config::set(key, &val_bool.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if !possible_values.is_empty()
                            && !possible_values.contains(&val_str.to_string())
                        {
                            bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        Config::max_turns()?;

        tracing::debug!(
            backend = %Config::get(ConfigKey::Backend),
            model = %Config::get(ConfigKey::Model),
            language = %Config::get(ConfigKey::Language),
            max_turns = %Config::get(ConfigKey::MaxTurns),
            prompt_style = %Config::get(ConfigKey::PromptStyle),
            translation = %Config::get(ConfigKey::Translation),
            dialect_normalization = %Config::get(ConfigKey::DialectNormalization),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let long = key.to_string();
                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(long.as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let possible_values = Config::possible_values(&cmd, key);
                if !possible_values.is_empty() {
                    description = format!(
                        "{description} [possible values: {}]",
                        possible_values.join(", ")
                    );
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i64>().is_ok() || val.parse::<bool>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
