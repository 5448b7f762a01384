use serde::{Deserialize, Serialize};

/// Numeric identity of a course in the catalog
pub type CourseCode = u32;

/// A catalog course, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique numeric identifier, e.g. `3570119`
    pub code: CourseCode,
    /// Short mnemonic code, e.g. `"CS101"`
    pub short_code: String,
    /// Display name
    pub name: String,
}

impl Course {
    pub fn new(code: CourseCode, short_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code,
            short_code: short_code.into(),
            name: name.into(),
        }
    }
}
