use models::{course::CourseCode, curriculum::ParsePrereqError};
use registry::RegistryError;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

/// Errors raised while loading tabular record files
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Csv(csv::Error),
    /// A curriculum row references a course absent from the catalog
    UnknownCourse(CourseCode),
    /// A curriculum row lists a prerequisite absent from the catalog
    UnknownPrerequisite {
        course: CourseCode,
        prerequisite: CourseCode,
    },
    /// A curriculum row's prerequisite field failed to parse
    InvalidPrerequisite {
        course: CourseCode,
        reason: ParsePrereqError,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(err) => write!(f, "failed to read record file: {err}"),
            Self::Csv(err) => write!(f, "malformed record: {err}"),
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
            Self::InvalidPrerequisite { course, reason } => {
                write!(f, "course {course}: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::InvalidPrerequisite { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RegistryError> for LoadError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownCourse(code) => Self::UnknownCourse(code),
            RegistryError::UnknownPrerequisite {
                course,
                prerequisite,
            } => Self::UnknownPrerequisite {
                course,
                prerequisite,
            },
        }
    }
}
