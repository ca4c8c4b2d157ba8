mod backend;
mod conversation;
mod error;
mod language;
mod message;
mod prompt_style;
mod role;
mod session;
mod slash_commands;
mod translator;

pub use backend::*;
pub use conversation::*;
pub use error::*;
pub use language::*;
pub use message::*;
pub use prompt_style::*;
pub use role::*;
pub use session::*;
pub use slash_commands::*;
pub use translator::*;
