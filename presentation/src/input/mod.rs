//! Plan query sources
//!
//! Implementations of the [`PlanQuerySource`](planqr_application::PlanQuerySource)
//! port for the command line.

mod args;
mod prompt;

pub use args::ArgsQuerySource;
pub use prompt::ConsolePromptSource;
