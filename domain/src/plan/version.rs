//! Plan version value objects
//!
//! A [`PlanVersion`] is produced only by the version resolver and never
//! changes afterwards. Both of its parts end up in places where arbitrary
//! text would be dangerous (a URL path segment and a file name), so they are
//! checked when parsed rather than trusted.

use crate::core::error::TokenError;
use crate::core::string::is_token_char;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque, service-assigned identifier of one plan version.
///
/// Restricted to `[A-Za-z0-9_-]`, which is safe both as a URL path segment
/// and inside a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionId(String);

impl VersionId {
    pub fn parse(value: impl Into<String>) -> Result<Self, TokenError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TokenError::Empty { kind: "versionId" });
        }
        if let Some(ch) = value.chars().find(|c| !is_token_char(*c)) {
            return Err(TokenError::UnsafeCharacter {
                kind: "versionId",
                value,
                ch,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VersionId {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<VersionId> for String {
    fn from(id: VersionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable, monotonically increasing version number.
///
/// The service normally sends an integer, but a string label is accepted
/// as long as it is safe inside a file name (`[A-Za-z0-9._-]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionNumber {
    Numeric(u64),
    Text(String),
}

impl VersionNumber {
    /// Parse a textual version label.
    pub fn parse_text(value: impl Into<String>) -> Result<Self, TokenError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TokenError::Empty {
                kind: "versionNumber",
            });
        }
        if let Some(ch) = value.chars().find(|c| !is_token_char(*c) && *c != '.') {
            return Err(TokenError::UnsafeCharacter {
                kind: "versionNumber",
                value,
                ch,
            });
        }
        Ok(Self::Text(value))
    }

    /// Interpret the `versionNumber` field of a service response.
    pub fn from_json(value: &Value) -> Result<Self, TokenError> {
        match value {
            Value::Number(n) => n.as_u64().map(Self::Numeric).ok_or_else(|| {
                TokenError::UnsupportedType {
                    kind: "versionNumber",
                    value: n.to_string(),
                }
            }),
            Value::String(s) => Self::parse_text(s.as_str()),
            other => Err(TokenError::UnsupportedType {
                kind: "versionNumber",
                value: other.to_string(),
            }),
        }
    }
}

impl From<u64> for VersionNumber {
    fn from(n: u64) -> Self {
        Self::Numeric(n)
    }
}

impl std::fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// The latest version of a plan as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanVersion {
    pub version_id: VersionId,
    pub version_number: VersionNumber,
}

impl PlanVersion {
    pub fn new(version_id: VersionId, version_number: impl Into<VersionNumber>) -> Self {
        Self {
            version_id,
            version_number: version_number.into(),
        }
    }
}
