//! Presentation layer for planqr
//!
//! This crate contains the CLI definition, query sources, placement
//! notifiers, output formatters and progress reporters.

pub mod cli;
pub mod input;
pub mod output;
pub mod placement;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::{ArgsQuerySource, ConsolePromptSource};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use placement::{ConsolePlacementNotifier, JsonPlacementNotifier};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
