//! Plan lookup value objects.
//!
//! - [`PlanQuery`]: what the user asked for
//! - [`PlanVersion`]: what the cockpit service answered

mod query;
mod version;

pub use query::PlanQuery;
pub use version::{PlanVersion, VersionId, VersionNumber};
