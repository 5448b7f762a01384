use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// Custom error type for parsing grade symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGradeError(pub String);

impl Display for ParseGradeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unknown grade symbol: '{}'", self.0)
    }
}

impl std::error::Error for ParseGradeError {}

/// A letter grade on the standard 4.0 scale
///
/// The set of symbols is closed; anything outside it fails to parse.
/// Input is case-insensitive and stored normalized to uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumProperty)]
pub enum Grade {
    #[strum(props(symbol = "A"))]
    A,

    #[strum(props(symbol = "A-"))]
    AMinus,

    #[strum(props(symbol = "B+"))]
    BPlus,

    #[strum(props(symbol = "B"))]
    B,

    #[strum(props(symbol = "B-"))]
    BMinus,

    #[strum(props(symbol = "C+"))]
    CPlus,

    #[strum(props(symbol = "C"))]
    C,

    #[strum(props(symbol = "C-"))]
    CMinus,

    #[strum(props(symbol = "D+"))]
    DPlus,

    #[strum(props(symbol = "D"))]
    D,

    #[strum(props(symbol = "F"))]
    F,
}

impl Grade {
    /// Quality points earned per credit hour for this grade
    pub fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// The canonical uppercase symbol, e.g. `"A-"`
    pub fn symbol(self) -> &'static str {
        self.get_str("symbol").unwrap_or_default()
    }
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();

        Self::iter()
            .find(|grade| grade.get_str("symbol") == Some(normalized.as_str()))
            .ok_or_else(|| ParseGradeError(s.to_string()))
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercase_symbols() {
        assert_eq!("A".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!("A-".parse::<Grade>().unwrap(), Grade::AMinus);
        assert_eq!("B+".parse::<Grade>().unwrap(), Grade::BPlus);
        assert_eq!("F".parse::<Grade>().unwrap(), Grade::F);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("a".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!("a-".parse::<Grade>().unwrap(), Grade::AMinus);
        assert_eq!("b+".parse::<Grade>().unwrap(), Grade::BPlus);
        assert_eq!(" c- ".parse::<Grade>().unwrap(), Grade::CMinus);
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        assert!("E".parse::<Grade>().is_err());
        assert!("A+".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
        assert!("pass".parse::<Grade>().is_err());
    }

    #[test]
    fn test_display_is_normalized_uppercase() {
        assert_eq!("a-".parse::<Grade>().unwrap().to_string(), "A-");
        assert_eq!("d+".parse::<Grade>().unwrap().to_string(), "D+");
    }

    #[test]
    fn test_points_follow_standard_spacing() {
        assert_eq!(Grade::A.points(), 4.0);
        assert_eq!(Grade::AMinus.points(), 3.7);
        assert_eq!(Grade::BPlus.points(), 3.3);
        assert_eq!(Grade::B.points(), 3.0);
        assert_eq!(Grade::C.points(), 2.0);
        assert_eq!(Grade::D.points(), 1.0);
        assert_eq!(Grade::F.points(), 0.0);
    }

    #[test]
    fn test_every_variant_has_a_symbol() {
        for grade in Grade::iter() {
            assert!(!grade.symbol().is_empty());
            assert_eq!(grade.symbol().parse::<Grade>().unwrap(), grade);
        }
    }
}
