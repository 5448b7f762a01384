use serde::{Deserialize, Serialize};

/// Identity row for a student
///
/// Enrollment state (bound curriculum, recorded grades, aggregates) lives
/// in the transcript engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: u32,
    pub firstname: String,
    pub lastname: String,
    pub dept_id: u32,
}

impl StudentProfile {
    pub fn new(
        id: u32,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        dept_id: u32,
    ) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
            dept_id,
        }
    }

    /// Family name first, matching the registrar's display convention
    pub fn full_name(&self) -> String {
        format!("{} {}", self.lastname, self.firstname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_puts_family_name_first() {
        let profile = StudentProfile::new(1, "John", "Doe", 389);
        assert_eq!(profile.full_name(), "Doe John");
    }
}
