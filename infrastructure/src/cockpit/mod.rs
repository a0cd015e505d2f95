//! Cockpit service adapter
//!
//! HTTP client for the public endpoints of the cockpit plan-management
//! service:
//!
//! - `GET /api/public/get-latest-plan-version-id?projectNumber=..&planTitle=..`
//! - `GET /api/public/verify/<versionId>`

pub mod client;
pub mod error;
pub mod protocol;
