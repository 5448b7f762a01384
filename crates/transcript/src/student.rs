use crate::{error::RecordError, semester::SemesterRecord};
use indexmap::IndexMap;
use log::debug;
use models::{
    course::CourseCode,
    curriculum::CurriculumEntry,
    grade::Grade,
    student::StudentProfile,
};
use registry::Registry;
use std::collections::HashMap;

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A student's transcript: the bound curriculum snapshot, the grades
/// recorded per semester, and the derived credit/CGPA aggregates.
///
/// Validation of every recording runs against the snapshot taken at bind
/// time, not against live registry state, so a curriculum reload never
/// changes what an already-enrolled student is allowed to record.
#[derive(Debug, Clone)]
pub struct Student {
    profile: StudentProfile,
    curriculum: Option<HashMap<CourseCode, CurriculumEntry>>,
    semesters: IndexMap<String, SemesterRecord>,
    total_credit_hours: u32,
    cgpa: f64,
}

impl Student {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            profile,
            curriculum: None,
            semesters: IndexMap::new(),
            total_credit_hours: 0,
            cgpa: 0.0,
        }
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    /// Copies the registry's current curriculum table wholesale into this
    /// student. Rebinding replaces the snapshot; there are no other side
    /// effects.
    pub fn bind_curriculum(&mut self, registry: &Registry) {
        let snapshot = registry.curriculum_snapshot();
        debug!(
            "student {}: bound curriculum snapshot of {} entries",
            self.profile.id,
            snapshot.len()
        );
        self.curriculum = Some(snapshot);
    }

    pub fn is_curriculum_bound(&self) -> bool {
        self.curriculum.is_some()
    }

    /// Records a grade for a course in a semester.
    ///
    /// Validation order: the course must be in the bound snapshot, every
    /// prerequisite must already have a recorded grade (any semester, any
    /// grade), and the symbol must parse as a letter grade. Nothing is
    /// mutated unless all three pass. On success the entry is appended to
    /// the semester (or overwritten in place for a re-grade) and the
    /// credit/CGPA aggregates are recomputed.
    pub fn record_grade(
        &mut self,
        semester: &str,
        course: CourseCode,
        grade: &str,
    ) -> Result<(), RecordError> {
        let curriculum = self
            .curriculum
            .as_ref()
            .ok_or(RecordError::NoCurriculumBound)?;
        let entry = curriculum
            .get(&course)
            .ok_or(RecordError::UnknownCourse(course))?;

        if let Some(&missing) = entry
            .prerequisites
            .iter()
            .find(|&&code| !self.has_taken(code))
        {
            return Err(RecordError::PrerequisiteNotMet { course, missing });
        }

        let grade = grade.parse::<Grade>()?;

        self.semesters
            .entry(semester.to_string())
            .or_default()
            .record(course, grade);
        self.recompute();
        Ok(())
    }

    /// Whether any grade has ever been recorded for this course
    pub fn has_taken(&self, course: CourseCode) -> bool {
        self.semesters.values().any(|record| record.contains(course))
    }

    pub fn semester_record(&self, semester: &str) -> Option<&SemesterRecord> {
        self.semesters.get(semester)
    }

    pub fn grade(&self, semester: &str, course: CourseCode) -> Option<Grade> {
        self.semesters.get(semester)?.grade(course)
    }

    /// Semester labels in first-recorded order, with their records
    pub fn semesters(&self) -> impl Iterator<Item = (&str, &SemesterRecord)> {
        self.semesters
            .iter()
            .map(|(label, record)| (label.as_str(), record))
    }

    /// Total credit hours recorded, as of the last mutation
    pub fn total_credit_hours(&self) -> u32 {
        self.total_credit_hours
    }

    /// Cumulative GPA, as of the last mutation
    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    /// GPA for one semester.
    ///
    /// `None` means no courses are recorded for that semester at all;
    /// `Some(0.0)` means entries exist but none carry credit weight.
    pub fn semester_gpa(&self, semester: &str) -> Option<f64> {
        let record = self
            .semesters
            .get(semester)
            .filter(|record| !record.is_empty())?;
        Some(self.grade_point_average(record.iter()))
    }

    /// Recomputes the cumulative GPA over all semesters, stores it, and
    /// returns it. Zero total credits yields 0.0.
    pub fn calculate_cgpa(&mut self) -> f64 {
        self.cgpa = self.grade_point_average(self.all_entries());
        self.cgpa
    }

    fn recompute(&mut self) {
        self.total_credit_hours = self.credit_hours();
        self.calculate_cgpa();
    }

    fn all_entries(&self) -> impl Iterator<Item = (CourseCode, Grade)> + '_ {
        self.semesters.values().flat_map(|record| record.iter())
    }

    /// Sum of snapshot credit weights over every recorded entry; entries
    /// whose course is missing from the snapshot are skipped.
    fn credit_hours(&self) -> u32 {
        let Some(curriculum) = self.curriculum.as_ref() else {
            return 0;
        };

        self.all_entries()
            .filter_map(|(course, _)| curriculum.get(&course))
            .map(|entry| entry.credit)
            .sum()
    }

    /// Credit-weighted grade-point average over `entries`, skipping
    /// courses missing from the snapshot. Zero total credits yields 0.0.
    fn grade_point_average(
        &self,
        entries: impl Iterator<Item = (CourseCode, Grade)>,
    ) -> f64 {
        let mut quality_points = 0.0;
        let mut credits = 0u32;

        if let Some(curriculum) = self.curriculum.as_ref() {
            for (course, grade) in entries {
                let Some(entry) = curriculum.get(&course) else {
                    continue;
                };
                quality_points += grade.points() * f64::from(entry.credit);
                credits += entry.credit;
            }
        }

        if credits == 0 {
            0.0
        } else {
            round2(quality_points / f64::from(credits))
        }
    }
}
