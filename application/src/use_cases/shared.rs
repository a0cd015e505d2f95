//! Shared utilities for use cases.
//!
//! Contains cancellation checking and the run state tracker used by the
//! generate pipeline.

use crate::ports::progress::RunProgressNotifier;
use planqr_domain::{PlanQuery, RunState};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Check if cancellation has been requested.
pub(crate) fn is_cancelled(token: &Option<CancellationToken>) -> bool {
    token.as_ref().is_some_and(|t| t.is_cancelled())
}

/// Tracks the [`RunState`] of one run and reports every transition.
pub(crate) struct RunTracker<'a> {
    state: RunState,
    query: &'a PlanQuery,
    progress: &'a dyn RunProgressNotifier,
}

impl<'a> RunTracker<'a> {
    pub(crate) fn new(query: &'a PlanQuery, progress: &'a dyn RunProgressNotifier) -> Self {
        Self {
            state: RunState::Idle,
            query,
            progress,
        }
    }

    pub(crate) fn state(&self) -> RunState {
        self.state
    }

    /// Move to `next`. Illegal transitions are a programming error.
    pub(crate) fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal run transition {:?} -> {:?}",
            self.state,
            next
        );
        debug!("Run state: {} -> {}", self.state.as_str(), next.as_str());
        let from = self.state;
        self.state = next;
        self.progress.on_state_change(from, next, self.query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<(RunState, RunState)>>);

    impl RunProgressNotifier for Recorder {
        fn on_state_change(&self, from: RunState, to: RunState, _query: &PlanQuery) {
            self.0.lock().unwrap().push((from, to));
        }
    }

    #[test]
    fn test_tracker_reports_transitions() {
        let query = PlanQuery::new("25-001", "Schnitt");
        let recorder = Recorder(Mutex::new(Vec::new()));
        let mut tracker = RunTracker::new(&query, &recorder);

        tracker.advance(RunState::Resolving);
        tracker.advance(RunState::ResolutionFailed);

        assert_eq!(tracker.state(), RunState::ResolutionFailed);
        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![
                (RunState::Idle, RunState::Resolving),
                (RunState::Resolving, RunState::ResolutionFailed),
            ]
        );
    }

    #[test]
    fn test_is_cancelled() {
        assert!(!is_cancelled(&None));
        let token = CancellationToken::new();
        let some = Some(token.clone());
        assert!(!is_cancelled(&some));
        token.cancel();
        assert!(is_cancelled(&some));
    }
}
