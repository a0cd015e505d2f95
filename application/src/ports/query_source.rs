//! Plan query source port
//!
//! Where the project number and plan title come from: an interactive
//! prompt, command-line arguments, a host dialog. The pipeline does not
//! care as long as it gets a [`PlanQuery`].

use planqr_domain::{InputError, PlanQuery};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuerySourceError {
    #[error("Input aborted")]
    Aborted,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Invalid(#[from] InputError),
}

pub trait PlanQuerySource: Send + Sync {
    /// Obtain one query. Implementations may block (e.g. on stdin).
    fn fetch(&self) -> Result<PlanQuery, QuerySourceError>;
}
