use crate::error::RegistryError;
use models::{
    course::{Course, CourseCode},
    curriculum::CurriculumEntry,
    department::Department,
};
use std::collections::HashMap;

/// Owns the shared department, course, and curriculum tables.
///
/// Departments and courses are load-once and read-only afterwards. The
/// curriculum table supports a full clear-and-replace reload; taking
/// `&mut self` makes the swap exclusive, so readers never observe a
/// partially-cleared table. A deployment that shares a registry across
/// threads wraps it in a `RwLock` and treats reload as a writer.
#[derive(Debug, Default)]
pub struct Registry {
    departments: HashMap<u32, Department>,
    courses: HashMap<CourseCode, Course>,
    curriculum: HashMap<CourseCode, CurriculumEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_department(&mut self, department: Department) {
        self.departments.insert(department.id, department);
    }

    pub fn insert_course(&mut self, course: Course) {
        self.courses.insert(course.code, course);
    }

    /// Validates and installs a full curriculum table, replacing the
    /// previous one wholesale.
    ///
    /// Every entry's course code and every prerequisite code must exist in
    /// the course catalog. On a validation failure nothing is installed and
    /// the previous table stays in place.
    ///
    /// # Returns
    /// The number of entries installed.
    pub fn replace_curriculum(
        &mut self,
        entries: Vec<CurriculumEntry>,
    ) -> Result<usize, RegistryError> {
        let mut staged = HashMap::with_capacity(entries.len());

        for entry in entries {
            if !self.courses.contains_key(&entry.course_code) {
                return Err(RegistryError::UnknownCourse(entry.course_code));
            }

            for &code in &entry.prerequisites {
                if !self.courses.contains_key(&code) {
                    return Err(RegistryError::UnknownPrerequisite {
                        course: entry.course_code,
                        prerequisite: code,
                    });
                }
            }

            staged.insert(entry.course_code, entry);
        }

        let installed = staged.len();
        self.curriculum = staged;
        Ok(installed)
    }

    /// Point-in-time copy of the curriculum table.
    ///
    /// This is what a student binds at enrollment start; later reloads do
    /// not reach the copy.
    pub fn curriculum_snapshot(&self) -> HashMap<CourseCode, CurriculumEntry> {
        self.curriculum.clone()
    }

    pub fn department(&self, id: u32) -> Option<&Department> {
        self.departments.get(&id)
    }

    pub fn course(&self, code: CourseCode) -> Option<&Course> {
        self.courses.get(&code)
    }

    pub fn curriculum_entry(&self, code: CourseCode) -> Option<&CurriculumEntry> {
        self.curriculum.get(&code)
    }

    pub fn has_course(&self, code: CourseCode) -> bool {
        self.courses.contains_key(&code)
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn curriculum_count(&self) -> usize {
        self.curriculum.len()
    }
}
