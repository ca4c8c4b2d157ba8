mod app_state;
mod dialect;
mod orchestrator;
mod prompt_builder;

pub use app_state::*;
pub use dialect::*;
pub use orchestrator::*;
pub use prompt_builder::*;
