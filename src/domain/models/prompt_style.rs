use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;

/// Which chat prompt is sent to the backend.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, EnumIter, EnumString, EnumVariantNames, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PromptStyle {
    /// The whole remembered conversation is rendered in to every prompt.
    #[default]
    Conversation,
    /// Only the current input is sent, the model has no memory.
    SingleTurn,
}
