#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use owo_colors::OwoColorize;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendName;
use crate::domain::models::Language;
use crate::domain::models::PromptStyle;
use crate::domain::services::help_text;

/// What the binary should do once the command line has been handled.
#[derive(Debug, PartialEq, Eq)]
pub enum StartMode {
    Chat,
    Ask(String),
    Analyze(String),
    Exit,
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path = Config::config_file_path();
    let config_path_display = config_file_path.to_string_lossy().to_string();
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_path_display}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn joined_values(matches: &ArgMatches, id: &str) -> String {
    return matches
        .get_many::<String>(id)
        .map(|vals| {
            return vals
                .map(|val| return val.to_string())
                .collect::<Vec<String>>()
                .join(" ");
        })
        .unwrap_or_default();
}

fn bool_values() -> PossibleValuesParser {
    return PossibleValuesParser::new(["true", "false"]);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_chat() -> Command {
    return Command::new("chat").about("Start a new chat session. This is the default command.");
}

fn subcommand_ask() -> Command {
    return Command::new("ask")
        .about("Sends a single message and prints the reply.")
        .arg(
            Arg::new("text")
                .help("The message to send.")
                .num_args(1..)
                .required(true),
        );
}

fn subcommand_analyze() -> Command {
    return Command::new("analyze")
        .about("Requests a detailed analysis of a question and prints it.")
        .arg(
            Arg::new("question")
                .help("The question to analyze.")
                .num_args(0..),
        );
}

fn global_arg(key: ConfigKey, env: &'static str) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .global(true);
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") {
                return format!("CHAT {line}").underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("careconnect")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_ask())
        .subcommand(subcommand_analyze())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            global_arg(ConfigKey::Backend, "CARECONNECT_BACKEND")
                .short('b')
                .help(format!(
                    "The backend hosting the completion model. [default: {}]",
                    Config::default(ConfigKey::Backend)
                ))
                .value_parser(PossibleValuesParser::new(BackendName::VARIANTS)),
        )
        .arg(
            global_arg(ConfigKey::BackendHealthCheckTimeout, "CARECONNECT_BACKEND_HEALTH_CHECK_TIMEOUT")
                .help(format!("Time to wait in milliseconds before timing out when doing a healthcheck for a backend. [default: {}]", Config::default(ConfigKey::BackendHealthCheckTimeout))),
        )
        .arg(
            global_arg(ConfigKey::ConfigFile, "CARECONNECT_CONFIG_FILE")
                .short('c')
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile))),
        )
        .arg(
            global_arg(ConfigKey::DialectNormalization, "CARECONNECT_DIALECT_NORMALIZATION")
                .help(format!("Replace informal phrasing (such as \"gonna\") before prompting. [default: {}]", Config::default(ConfigKey::DialectNormalization)))
                .value_parser(bool_values()),
        )
        .arg(
            global_arg(ConfigKey::Language, "CARECONNECT_LANGUAGE")
                .short('l')
                .help(format!(
                    "The language you chat in. [default: {}]",
                    Config::default(ConfigKey::Language)
                ))
                .value_parser(PossibleValuesParser::new(Language::VARIANTS)),
        )
        .arg(
            global_arg(ConfigKey::MaxTurns, "CARECONNECT_MAX_TURNS")
                .help(format!(
                    "How many messages the conversation remembers. [default: {}]",
                    Config::default(ConfigKey::MaxTurns)
                )),
        )
        .arg(
            global_arg(ConfigKey::Model, "CARECONNECT_MODEL")
                .short('m')
                .help("The model to request completions from. Defaults to a backend specific model."),
        )
        .arg(
            global_arg(ConfigKey::OllamaURL, "CARECONNECT_OLLAMA_URL")
                .help(format!("Ollama API URL when using the Ollama backend. [default: {}]", Config::default(ConfigKey::OllamaURL))),
        )
        .arg(
            global_arg(ConfigKey::OpenAiToken, "OPENAI_API_KEY")
                .help("OpenAI API token when using the OpenAI backend."),
        )
        .arg(
            global_arg(ConfigKey::OpenAiURL, "CARECONNECT_OPENAI_URL")
                .help(format!("OpenAI API URL when using the OpenAI backend. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::OpenAiURL))),
        )
        .arg(
            global_arg(ConfigKey::Persona, "CARECONNECT_PERSONA")
                .help(format!(
                    "The assistant name used in every prompt. [default: {}]",
                    Config::default(ConfigKey::Persona)
                )),
        )
        .arg(
            global_arg(ConfigKey::PromptStyle, "CARECONNECT_PROMPT_STYLE")
                .help(format!("Send the whole conversation, or only the latest message. [default: {}]", Config::default(ConfigKey::PromptStyle)))
                .value_parser(PossibleValuesParser::new(PromptStyle::VARIANTS)),
        )
        .arg(
            global_arg(ConfigKey::TranslateURL, "CARECONNECT_TRANSLATE_URL")
                .help(format!("Translation service URL used when translation is enabled. [default: {}]", Config::default(ConfigKey::TranslateURL))),
        )
        .arg(
            global_arg(ConfigKey::Translation, "CARECONNECT_TRANSLATION")
                .short('t')
                .help(format!("Translate messages to English before prompting, and replies back to your language. [default: {}]", Config::default(ConfigKey::Translation)))
                .value_parser(bool_values()),
        );
}

pub async fn parse() -> Result<StartMode> {
    let matches = build().get_matches();
    return handle_matches(&matches).await;
}

async fn handle_matches(matches: &ArgMatches) -> Result<StartMode> {
    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![matches, subcmd_matches]).await?;
        }
        Some(("ask", subcmd_matches)) => {
            Config::load(build(), vec![matches, subcmd_matches]).await?;
            return Ok(StartMode::Ask(joined_values(subcmd_matches, "text")));
        }
        Some(("analyze", subcmd_matches)) => {
            Config::load(build(), vec![matches, subcmd_matches]).await?;
            return Ok(StartMode::Analyze(joined_values(
                subcmd_matches,
                "question",
            )));
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(StartMode::Exit);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(StartMode::Exit);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(StartMode::Exit);
            }
            Some(("path", _)) => {
                println!("{}", Config::config_file_path().to_string_lossy());
                return Ok(StartMode::Exit);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(StartMode::Exit);
            }
        },
        _ => {
            Config::load(build(), vec![matches]).await?;
        }
    }

    return Ok(StartMode::Chat);
}
