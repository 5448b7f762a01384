use models::course::CourseCode;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation errors raised when installing a curriculum table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A curriculum entry references a course code absent from the catalog
    UnknownCourse(CourseCode),
    /// A prerequisite references a course code absent from the catalog
    UnknownPrerequisite {
        course: CourseCode,
        prerequisite: CourseCode,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownCourse(code) => {
                write!(f, "course {code} not found in the course catalog")
            }
            Self::UnknownPrerequisite {
                course,
                prerequisite,
            } => write!(
                f,
                "prerequisite course {prerequisite} for course {course} not found in the course catalog"
            ),
        }
    }
}

impl std::error::Error for RegistryError {}
