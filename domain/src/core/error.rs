//! Domain error types

use thiserror::Error;

/// Invalid input supplied by the caller.
///
/// The input source is expected to prevent these, but the pipeline still
/// checks so that a bad query ends the run cleanly instead of reaching the
/// service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Project number must not be empty")]
    EmptyProjectNumber,

    #[error("Plan title must not be empty")]
    EmptyPlanTitle,

    #[error("Invalid version id: {0}")]
    InvalidVersionId(#[from] TokenError),
}

/// A token that cannot be safely embedded in a URL or file name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("{kind} is empty")]
    Empty { kind: &'static str },

    #[error("{kind} '{value}' contains unsafe character {ch:?}")]
    UnsafeCharacter {
        kind: &'static str,
        value: String,
        ch: char,
    },

    #[error("{kind} must be a non-negative integer or a string, got {value}")]
    UnsupportedType { kind: &'static str, value: String },

    #[error("{kind} '{value}' is not recognized")]
    Unrecognized { kind: &'static str, value: String },
}
