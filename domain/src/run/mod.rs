//! Run lifecycle.

mod state;

pub use state::RunState;
