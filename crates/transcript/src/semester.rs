use indexmap::IndexMap;
use models::{course::CourseCode, grade::Grade};

/// Grades recorded in one semester, keyed by course code.
///
/// Entries keep the order the courses were first recorded in;
/// re-recording a course overwrites its grade in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemesterRecord {
    entries: IndexMap<CourseCode, Grade>,
}

impl SemesterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the grade for a course
    pub fn record(&mut self, course: CourseCode, grade: Grade) {
        self.entries.insert(course, grade);
    }

    pub fn grade(&self, course: CourseCode) -> Option<Grade> {
        self.entries.get(&course).copied()
    }

    pub fn contains(&self, course: CourseCode) -> bool {
        self.entries.contains_key(&course)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-recorded order
    pub fn iter(&self) -> impl Iterator<Item = (CourseCode, Grade)> + '_ {
        self.entries.iter().map(|(&course, &grade)| (course, grade))
    }
}
