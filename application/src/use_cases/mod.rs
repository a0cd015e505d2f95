//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_artifact;
pub mod check_verification;
pub mod generate_qr;
pub(crate) mod shared;
