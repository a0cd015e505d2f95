//! PlanQuery value object

use crate::core::error::InputError;
use serde::{Deserialize, Serialize};

/// A lookup request for the latest version of a plan (Value Object)
///
/// Both fields are opaque identifiers. The only rule is that neither may be
/// empty, which [`PlanQuery::validate`] checks. A query built with
/// [`PlanQuery::new`] is not validated yet, so collaborators that pass
/// through raw user input never panic on empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanQuery {
    project_number: String,
    plan_title: String,
}

impl PlanQuery {
    /// Create a query from raw input, trimming surrounding whitespace.
    pub fn new(project_number: impl Into<String>, plan_title: impl Into<String>) -> Self {
        Self {
            project_number: project_number.into().trim().to_string(),
            plan_title: plan_title.into().trim().to_string(),
        }
    }

    /// Create a query and validate it in one step.
    pub fn try_new(
        project_number: impl Into<String>,
        plan_title: impl Into<String>,
    ) -> Result<Self, InputError> {
        let query = Self::new(project_number, plan_title);
        query.validate()?;
        Ok(query)
    }

    /// Check that both fields are non-empty.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.project_number.is_empty() {
            return Err(InputError::EmptyProjectNumber);
        }
        if self.plan_title.is_empty() {
            return Err(InputError::EmptyPlanTitle);
        }
        Ok(())
    }

    pub fn project_number(&self) -> &str {
        &self.project_number
    }

    pub fn plan_title(&self) -> &str {
        &self.plan_title
    }
}

impl std::fmt::Display for PlanQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "plan '{}' in project {}",
            self.plan_title, self.project_number
        )
    }
}
