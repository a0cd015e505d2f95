//! Artifact file naming
//!
//! `QR_<projectNumber>_<planTitle>_V<versionNumber>_<timestamp>.<ext>`
//!
//! Project number and plan title are user input and are sanitized with
//! [`sanitize_file_segment`]. The version number is already restricted to
//! file-name-safe characters by [`VersionNumber`]. The timestamp has
//! second resolution; same-second collisions are resolved by
//! [`ArtifactName::collision_variant`].
//!
//! Each variable segment is cut to a byte budget so that the longest name,
//! collision suffix included, stays below the common 255-byte file name
//! limit.

use crate::core::string::sanitize_file_segment;
use crate::plan::{PlanQuery, VersionNumber};
use chrono::{DateTime, Local};

/// `chrono` format of the 14-digit timestamp segment.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

const MAX_PROJECT_BYTES: usize = 40;
const MAX_TITLE_BYTES: usize = 120;
const MAX_VERSION_BYTES: usize = 32;
const MAX_EXTENSION_BYTES: usize = 16;

/// Cut `segment` to at most `max` bytes on a char boundary.
fn truncated(mut segment: String, max: usize) -> String {
    if segment.len() > max {
        let mut end = max;
        while !segment.is_char_boundary(end) {
            end -= 1;
        }
        segment.truncate(end);
    }
    segment
}

/// File name of a rendered QR image, split into stem and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    stem: String,
    extension: String,
}

impl ArtifactName {
    pub fn new(
        query: &PlanQuery,
        version_number: &VersionNumber,
        created_at: &DateTime<Local>,
        extension: &str,
    ) -> Self {
        let stem = format!(
            "QR_{}_{}_V{}_{}",
            truncated(
                sanitize_file_segment(query.project_number()),
                MAX_PROJECT_BYTES
            ),
            truncated(sanitize_file_segment(query.plan_title()), MAX_TITLE_BYTES),
            truncated(version_number.to_string(), MAX_VERSION_BYTES),
            created_at.format(TIMESTAMP_FORMAT)
        );
        Self {
            stem,
            extension: truncated(sanitize_file_segment(extension), MAX_EXTENSION_BYTES),
        }
    }

    /// The primary file name, e.g. `QR_25-001_Grundriss_V7_20250314092653.png`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }

    /// Alternative name used when the primary one is taken.
    ///
    /// `attempt` 0 and 1 return the primary name; from 2 on a `-N` suffix
    /// is inserted before the extension.
    pub fn collision_variant(&self, attempt: u32) -> String {
        if attempt <= 1 {
            self.file_name()
        } else {
            format!("{}-{}.{}", self.stem, attempt, self.extension)
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).single().unwrap()
    }

    #[test]
    fn test_scenario_grundriss() {
        let query = PlanQuery::try_new("25-001", "Grundriss Erdgeschoss").unwrap();
        let name = ArtifactName::new(&query, &VersionNumber::Numeric(7), &at(), "png");
        assert_eq!(
            name.file_name(),
            "QR_25-001_Grundriss_Erdgeschoss_V7_20250314092653.png"
        );
    }

    #[test]
    fn test_scenario_separator_title() {
        let query = PlanQuery::try_new("25-001", "A/B:C").unwrap();
        let name = ArtifactName::new(&query, &VersionNumber::Numeric(2), &at(), "png");
        assert!(name.file_name().contains("_A_B_C_V2_"));
    }

    #[test]
    fn test_no_path_separators_under_any_input() {
        let titles = ["/", "\\", "../../etc/passwd", "\n\r\t", "C:\\x", "a/./b"];
        for title in titles {
            let query = PlanQuery::new("../25", title);
            let name = ArtifactName::new(&query, &VersionNumber::Numeric(1), &at(), "png");
            let file_name = name.file_name();
            assert!(!file_name.contains('/'), "{file_name}");
            assert!(!file_name.contains('\\'), "{file_name}");
            assert!(!file_name.chars().any(|c| c.is_control()), "{file_name}");
        }
    }

    #[test]
    fn test_text_version_number() {
        let query = PlanQuery::try_new("25-001", "Schnitt").unwrap();
        let version = VersionNumber::parse_text("3b").unwrap();
        let name = ArtifactName::new(&query, &version, &at(), "png");
        assert_eq!(name.stem(), "QR_25-001_Schnitt_V3b_20250314092653");
    }

    #[test]
    fn test_collision_variants() {
        let query = PlanQuery::try_new("25-001", "Schnitt").unwrap();
        let name = ArtifactName::new(&query, &VersionNumber::Numeric(1), &at(), "png");
        assert_eq!(name.collision_variant(1), name.file_name());
        assert_eq!(
            name.collision_variant(2),
            "QR_25-001_Schnitt_V1_20250314092653-2.png"
        );
        assert_ne!(name.collision_variant(2), name.collision_variant(3));
    }

    #[test]
    fn test_long_title_fits_file_name_limit() {
        let query = PlanQuery::try_new("25-001", "Ansicht Süd ".repeat(60)).unwrap();
        let name = ArtifactName::new(&query, &VersionNumber::Numeric(12), &at(), "png");

        assert!(name.collision_variant(100).len() <= 255);
        assert!(name.stem().starts_with("QR_25-001_Ansicht_S_d_"));
        assert!(name.stem().ends_with("_V12_20250314092653"));
    }

    #[test]
    fn test_truncated_keeps_char_boundary() {
        assert_eq!(truncated("abcdef".to_string(), 4), "abcd");
        assert_eq!(truncated("aü".to_string(), 2), "a");
        assert_eq!(truncated("short".to_string(), 40), "short");
    }
}
