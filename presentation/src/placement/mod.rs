//! Placement notifiers
//!
//! The CAD host places the image; these tell it (or the user) where the
//! image is and what it encodes.

mod console;
mod json;

pub use console::ConsolePlacementNotifier;
pub use json::JsonPlacementNotifier;
