use models::{course::CourseCode, grade::ParseGradeError};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Failure modes of a grade-recording call
///
/// All validation happens before any mutation; a caller that sees one of
/// these can assume the student's history is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No curriculum snapshot has ever been bound for this student
    NoCurriculumBound,
    /// The course code is absent from the bound curriculum snapshot
    UnknownCourse(CourseCode),
    /// A required prerequisite has no recorded grade for this student
    PrerequisiteNotMet {
        course: CourseCode,
        missing: CourseCode,
    },
    /// The grade symbol is not in the fixed grade set
    InvalidGrade(String),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NoCurriculumBound => {
                write!(f, "no curriculum has been bound for this student")
            }
            Self::UnknownCourse(code) => {
                write!(f, "course {code} not found in the bound curriculum")
            }
            Self::PrerequisiteNotMet { course, missing } => {
                write!(f, "prerequisite {missing} for course {course} not taken")
            }
            Self::InvalidGrade(symbol) => write!(f, "invalid grade '{symbol}'"),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<ParseGradeError> for RecordError {
    fn from(err: ParseGradeError) -> Self {
        Self::InvalidGrade(err.0)
    }
}
