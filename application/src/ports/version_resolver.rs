//! Version resolver port
//!
//! Defines how the application layer asks the cockpit service for the
//! latest version of a plan.

use async_trait::async_trait;
use planqr_domain::{PlanQuery, PlanVersion, TokenError};
use thiserror::Error;

/// Message used when the service answers 404 without an error text.
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Plan nicht gefunden";

/// Errors that can occur while resolving a plan version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The service does not know the project, plan or any version of it.
    /// Expected and recoverable: the user should check the input.
    #[error("{message}")]
    NotFound { message: String },

    /// Any other non-success answer, or a success answer carrying a
    /// token that is unsafe to embed.
    #[error("Service error (HTTP {status_code}): {reason}")]
    ServiceError { status_code: u16, reason: String },

    /// DNS, connection, timeout or an unreadable response body.
    #[error("Transport error: {cause}")]
    TransportError { cause: String },
}

impl ResolutionError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::TransportError {
            cause: cause.to_string(),
        }
    }

    /// A 200 response whose tokens failed validation.
    pub fn malformed(error: TokenError) -> Self {
        Self::ServiceError {
            status_code: 200,
            reason: format!("malformed response: {}", error),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Resolver for the latest version of a plan
///
/// Every call issues exactly one request to the service. Implementations
/// must not cache or retry: the service is the source of truth for
/// "latest", and a failure ends the run.
#[async_trait]
pub trait PlanVersionResolver: Send + Sync {
    /// Look up the latest version of `query`.
    ///
    /// The query is not validated here; empty fields are passed through
    /// and answered by the service.
    async fn resolve_latest_version(
        &self,
        query: &PlanQuery,
    ) -> Result<PlanVersion, ResolutionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_displays_service_message() {
        let error = ResolutionError::not_found("Plan nicht gefunden");
        assert_eq!(error.to_string(), "Plan nicht gefunden");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_malformed_is_service_error() {
        let error = ResolutionError::malformed(TokenError::Empty { kind: "versionId" });
        assert!(matches!(
            error,
            ResolutionError::ServiceError {
                status_code: 200,
                ..
            }
        ));
        assert!(!error.is_not_found());
    }
}
