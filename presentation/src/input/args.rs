//! Query taken from command-line arguments

use planqr_application::{PlanQuerySource, QuerySourceError};
use planqr_domain::PlanQuery;

/// Yields the query given on the command line.
pub struct ArgsQuerySource {
    project_number: String,
    plan_title: String,
}

impl ArgsQuerySource {
    pub fn new(project_number: impl Into<String>, plan_title: impl Into<String>) -> Self {
        Self {
            project_number: project_number.into(),
            plan_title: plan_title.into(),
        }
    }
}

impl PlanQuerySource for ArgsQuerySource {
    fn fetch(&self) -> Result<PlanQuery, QuerySourceError> {
        Ok(PlanQuery::try_new(&self.project_number, &self.plan_title)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_arguments() {
        let query = ArgsQuerySource::new(" 25-001 ", "Grundriss Erdgeschoss ")
            .fetch()
            .unwrap();
        assert_eq!(query.project_number(), "25-001");
        assert_eq!(query.plan_title(), "Grundriss Erdgeschoss");
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let result = ArgsQuerySource::new("25-001", "   ").fetch();
        assert!(matches!(result, Err(QuerySourceError::Invalid(_))));
    }
}
