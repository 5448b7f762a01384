use crate::course::CourseCode;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Custom error type for parsing prerequisite lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePrereqError(pub String);

impl Display for ParsePrereqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invalid prerequisite course code: '{}'", self.0)
    }
}

impl std::error::Error for ParsePrereqError {}

/// Prerequisite course codes as written in the curriculum file:
/// `"|"`-delimited numeric codes, or empty for none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrereqList(pub Vec<CourseCode>);

impl PrereqList {
    pub fn into_inner(self) -> Vec<CourseCode> {
        self.0
    }
}

impl FromStr for PrereqList {
    type Err = ParsePrereqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }

        let mut codes = Vec::new();
        for part in s.split('|') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let code = part
                .parse::<CourseCode>()
                .map_err(|_| ParsePrereqError(part.to_string()))?;
            codes.push(code);
        }

        Ok(Self(codes))
    }
}

impl Display for PrereqList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for code in &self.0 {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{code}")?;
            first = false;
        }
        Ok(())
    }
}

/// Credit weights, instructional hours, and prerequisites for one course
///
/// A credit weight of zero is legal (seminars); such entries appear in a
/// student's history but never contribute to GPA or credit totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumEntry {
    pub course_code: CourseCode,
    pub credit: u32,
    pub theory_hours: u32,
    pub practical_hours: u32,
    pub ects: f64,
    pub prerequisites: Vec<CourseCode>,
}

impl CurriculumEntry {
    pub fn new(course_code: CourseCode, credit: u32, prerequisites: Vec<CourseCode>) -> Self {
        Self {
            course_code,
            credit,
            theory_hours: 0,
            practical_hours: 0,
            ects: 0.0,
            prerequisites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_parse_prereqs(input: &str, expected: &[CourseCode]) {
        let result = PrereqList::from_str(input);
        assert!(
            result.is_ok(),
            "Failed to parse '{}': {:?}",
            input,
            result.err()
        );
        assert_eq!(result.unwrap().0, expected);
    }

    #[test]
    fn test_parse_empty_field() {
        test_parse_prereqs("", &[]);
        test_parse_prereqs("   ", &[]);
    }

    #[test]
    fn test_parse_single_code() {
        test_parse_prereqs("3570100", &[3570100]);
        test_parse_prereqs(" 3570100 ", &[3570100]);
    }

    #[test]
    fn test_parse_delimited_codes() {
        test_parse_prereqs("3570100|3580105", &[3570100, 3580105]);
        test_parse_prereqs("3570100 | 3580105 | 3600107", &[3570100, 3580105, 3600107]);
    }

    #[test]
    fn test_parse_rejects_non_numeric_codes() {
        assert!(PrereqList::from_str("CS101").is_err());
        assert!(PrereqList::from_str("3570100|abc").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let list = PrereqList(vec![3570100, 3580105]);
        assert_eq!(list.to_string(), "3570100|3580105");
        assert_eq!(list.to_string().parse::<PrereqList>().unwrap(), list);
    }
}
