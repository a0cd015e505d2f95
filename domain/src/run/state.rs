//! Run state machine
//!
//! ```text
//! Idle -> Resolving -> Resolved -> Building -> Built -> Done
//!              |                       |
//!              v                       v
//!      ResolutionFailed           BuildFailed
//! ```
//!
//! There are no retry edges: a failure ends the run.

use serde::{Deserialize, Serialize};

/// State of a single verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Idle,
    /// Waiting for the cockpit service
    Resolving,
    Resolved,
    ResolutionFailed,
    /// Encoding and writing the QR image
    Building,
    Built,
    BuildFailed,
    /// Artifact handed to the placement collaborator
    Done,
}

impl RunState {
    pub fn as_str(&self) -> &str {
        match self {
            RunState::Idle => "idle",
            RunState::Resolving => "resolving",
            RunState::Resolved => "resolved",
            RunState::ResolutionFailed => "resolution_failed",
            RunState::Building => "building",
            RunState::Built => "built",
            RunState::BuildFailed => "build_failed",
            RunState::Done => "done",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            RunState::Idle => "Idle",
            RunState::Resolving => "Resolving latest version",
            RunState::Resolved => "Version resolved",
            RunState::ResolutionFailed => "Resolution failed",
            RunState::Building => "Building QR code",
            RunState::Built => "QR code written",
            RunState::BuildFailed => "Build failed",
            RunState::Done => "Done",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::ResolutionFailed | RunState::BuildFailed | RunState::Done
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RunState::ResolutionFailed | RunState::BuildFailed)
    }

    /// Whether `next` is a legal successor of this state.
    pub fn can_transition_to(&self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (*self, next),
            (Idle, Resolving)
                | (Resolving, Resolved)
                | (Resolving, ResolutionFailed)
                | (Resolved, Building)
                | (Building, Built)
                | (Building, BuildFailed)
                | (Built, Done)
        )
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RunState; 8] = [
        RunState::Idle,
        RunState::Resolving,
        RunState::Resolved,
        RunState::ResolutionFailed,
        RunState::Building,
        RunState::Built,
        RunState::BuildFailed,
        RunState::Done,
    ];

    #[test]
    fn test_happy_path_is_legal() {
        let path = [
            RunState::Idle,
            RunState::Resolving,
            RunState::Resolved,
            RunState::Building,
            RunState::Built,
            RunState::Done,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{:?}", pair);
        }
    }

    #[test]
    fn test_terminal_states_have_no_successors() {
        for state in ALL.iter().filter(|s| s.is_terminal()) {
            for next in ALL {
                assert!(!state.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_no_retry_edges() {
        assert!(!RunState::ResolutionFailed.can_transition_to(RunState::Resolving));
        assert!(!RunState::BuildFailed.can_transition_to(RunState::Building));
        assert!(!RunState::Idle.can_transition_to(RunState::Building));
    }

    #[test]
    fn test_failure_states() {
        assert!(RunState::ResolutionFailed.is_failure());
        assert!(RunState::BuildFailed.is_failure());
        assert!(!RunState::Done.is_failure());
        assert_eq!(RunState::ResolutionFailed.as_str(), "resolution_failed");
    }
}
