use crate::{error::LoadError, policy::RowPolicy};
use models::curriculum::{CurriculumEntry, PrereqList};
use registry::Registry;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

#[derive(Debug, Deserialize)]
struct CurriculumRow {
    numeric_course_code: u32,
    credit: u32,
    theory: u32,
    practical: u32,
    ects: f64,
    prerequisite: String,
}

/// Loads a curriculum file and installs it as the registry's curriculum
/// table, replacing any previous table wholesale.
///
/// Rows are validated against the course catalog: the course itself and
/// every `"|"`-delimited prerequisite code must already be loaded.
/// Validation failures are row errors and follow `policy` like parse
/// failures do.
///
/// # Arguments
/// * `reader` - CSV input with a
///   `numeric_course_code,credit,theory,practical,ects,prerequisite` header row
/// * `registry` - Table owner; must already hold the course catalog
/// * `policy` - What to do with rows that fail to parse or validate
///
/// # Returns
/// The number of curriculum entries installed.
pub fn load_curriculum<R: Read>(
    reader: R,
    registry: &mut Registry,
    policy: RowPolicy,
) -> Result<usize, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut staged = Vec::new();

    for (record, row) in csv_reader.deserialize::<CurriculumRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                policy.admit("curriculum", record + 1, err.into())?;
                continue;
            }
        };

        let prerequisites = match row.prerequisite.parse::<PrereqList>() {
            Ok(list) => list.into_inner(),
            Err(reason) => {
                policy.admit(
                    "curriculum",
                    record + 1,
                    LoadError::InvalidPrerequisite {
                        course: row.numeric_course_code,
                        reason,
                    },
                )?;
                continue;
            }
        };

        if !registry.has_course(row.numeric_course_code) {
            policy.admit(
                "curriculum",
                record + 1,
                LoadError::UnknownCourse(row.numeric_course_code),
            )?;
            continue;
        }

        if let Some(&missing) = prerequisites.iter().find(|code| !registry.has_course(**code)) {
            policy.admit(
                "curriculum",
                record + 1,
                LoadError::UnknownPrerequisite {
                    course: row.numeric_course_code,
                    prerequisite: missing,
                },
            )?;
            continue;
        }

        staged.push(CurriculumEntry {
            course_code: row.numeric_course_code,
            credit: row.credit,
            theory_hours: row.theory,
            practical_hours: row.practical,
            ects: row.ects,
            prerequisites,
        });
    }

    Ok(registry.replace_curriculum(staged)?)
}

/// Opens `path` and installs the curriculum table from it
pub fn load_curriculum_from_path(
    path: impl AsRef<Path>,
    registry: &mut Registry,
    policy: RowPolicy,
) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    load_curriculum(file, registry, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::load_courses;

    fn registry_with_catalog() -> Registry {
        let catalog = "\
numeric_course_code,course_code,course_name
3570100,CS100,Pre-Intro Course
3570119,CS101,Intro Course
3580105,CS102,Data Structures
";
        let mut registry = Registry::new();
        load_courses(catalog.as_bytes(), &mut registry, RowPolicy::Strict).unwrap();
        registry
    }

    #[test]
    fn test_load_curriculum_with_prerequisites() {
        let input = "\
numeric_course_code,credit,theory,practical,ects,prerequisite
3570100,3,3,0,5.0,
3570119,5,4,2,7.5,3570100
3580105,4,3,2,6.0,
";
        let mut registry = registry_with_catalog();
        let loaded =
            load_curriculum(input.as_bytes(), &mut registry, RowPolicy::Strict).unwrap();

        assert_eq!(loaded, 3);

        let entry = registry.curriculum_entry(3570119).unwrap();
        assert_eq!(entry.credit, 5);
        assert_eq!(entry.theory_hours, 4);
        assert_eq!(entry.practical_hours, 2);
        assert_eq!(entry.ects, 7.5);
        assert_eq!(entry.prerequisites, vec![3570100]);

        assert!(registry.curriculum_entry(3580105).unwrap().prerequisites.is_empty());
    }

    #[test]
    fn test_unknown_course_aborts_strict_load() {
        let input = "\
numeric_course_code,credit,theory,practical,ects,prerequisite
9999999,3,3,0,5.0,
";
        let mut registry = registry_with_catalog();
        let result = load_curriculum(input.as_bytes(), &mut registry, RowPolicy::Strict);

        assert!(matches!(result, Err(LoadError::UnknownCourse(9999999))));
    }

    #[test]
    fn test_unknown_prerequisite_aborts_strict_load() {
        let input = "\
numeric_course_code,credit,theory,practical,ects,prerequisite
3570119,5,4,2,7.5,1234567
";
        let mut registry = registry_with_catalog();
        let result = load_curriculum(input.as_bytes(), &mut registry, RowPolicy::Strict);

        assert!(matches!(
            result,
            Err(LoadError::UnknownPrerequisite {
                course: 3570119,
                prerequisite: 1234567,
            })
        ));
    }

    #[test]
    fn test_invalid_rows_are_dropped_under_skip_policy() {
        let input = "\
numeric_course_code,credit,theory,practical,ects,prerequisite
3570100,3,3,0,5.0,
9999999,3,3,0,5.0,
3570119,5,4,2,7.5,not-a-code
";
        let mut registry = registry_with_catalog();
        let loaded =
            load_curriculum(input.as_bytes(), &mut registry, RowPolicy::SkipAndLog).unwrap();

        assert_eq!(loaded, 1);
        assert!(registry.curriculum_entry(3570100).is_some());
        assert!(registry.curriculum_entry(9999999).is_none());
        assert!(registry.curriculum_entry(3570119).is_none());
    }

    #[test]
    fn test_reload_replaces_previous_table() {
        let first = "\
numeric_course_code,credit,theory,practical,ects,prerequisite
3570100,3,3,0,5.0,
3570119,5,4,2,7.5,3570100
";
        let second = "\
numeric_course_code,credit,theory,practical,ects,prerequisite
3580105,4,3,2,6.0,
";
        let mut registry = registry_with_catalog();
        load_curriculum(first.as_bytes(), &mut registry, RowPolicy::Strict).unwrap();
        load_curriculum(second.as_bytes(), &mut registry, RowPolicy::Strict).unwrap();

        assert_eq!(registry.curriculum_count(), 1);
        assert!(registry.curriculum_entry(3570119).is_none());
        assert!(registry.curriculum_entry(3580105).is_some());
    }
}
