//! Logging infrastructure: the JSONL run log.
//!
//! Provides [`JsonlRunLogger`], an append-only JSONL writer that implements
//! the [`RunLogger`](planqr_application::RunLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRunLogger;
