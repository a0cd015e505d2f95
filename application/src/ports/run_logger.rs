//! Port for structured run logging.
//!
//! Defines the [`RunLogger`] trait for recording the outcome of each run
//! (query, resolved version, artifact path, failure) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps a
//! machine-readable trail of which QR code was issued for which version.

use serde_json::Value;

/// A structured run event for logging.
pub struct RunEvent {
    /// Event type identifier (e.g., "run_started", "artifact_built").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RunEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging run events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a broken log must not
/// fail a run that otherwise succeeded.
pub trait RunLogger: Send + Sync {
    fn log(&self, event: RunEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoRunLogger;

impl RunLogger for NoRunLogger {
    fn log(&self, _event: RunEvent) {}
}
