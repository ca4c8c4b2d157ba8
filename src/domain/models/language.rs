#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;

/// Languages a user can chat in. The string form is the code sent to the
/// translation service.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    EnumVariantNames,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    ZhCn,
    Ja,
}

impl Language {
    pub fn parse(code: &str) -> Option<Language> {
        return code.trim().to_lowercase().parse::<Language>().ok();
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => return "English",
            Language::Es => return "Spanish",
            Language::Fr => return "French",
            Language::De => return "German",
            Language::ZhCn => return "Chinese (Simplified)",
            Language::Ja => return "Japanese",
        }
    }

    pub fn is_english(&self) -> bool {
        return *self == Language::En;
    }
}
