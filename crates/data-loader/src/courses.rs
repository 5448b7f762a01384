use crate::{error::LoadError, policy::RowPolicy};
use models::course::Course;
use registry::Registry;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

#[derive(Debug, Deserialize)]
struct CourseRow {
    numeric_course_code: u32,
    course_code: String,
    course_name: String,
}

/// Loads catalog course records into the registry.
///
/// # Arguments
/// * `reader` - CSV input with a `numeric_course_code,course_code,course_name` header row
/// * `registry` - Table owner to populate
/// * `policy` - What to do with rows that fail to parse
///
/// # Returns
/// The number of courses loaded.
pub fn load_courses<R: Read>(
    reader: R,
    registry: &mut Registry,
    policy: RowPolicy,
) -> Result<usize, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut loaded = 0;

    for (record, row) in csv_reader.deserialize::<CourseRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                policy.admit("courses", record + 1, err.into())?;
                continue;
            }
        };

        registry.insert_course(Course::new(
            row.numeric_course_code,
            row.course_code,
            row.course_name,
        ));
        loaded += 1;
    }

    Ok(loaded)
}

/// Opens `path` and loads catalog courses from it
pub fn load_courses_from_path(
    path: impl AsRef<Path>,
    registry: &mut Registry,
    policy: RowPolicy,
) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    load_courses(file, registry, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_courses() {
        let input = "\
numeric_course_code,course_code,course_name
3570119,CS101,Intro Course
3580105,CS102,Data Structures
";
        let mut registry = Registry::new();
        let loaded = load_courses(input.as_bytes(), &mut registry, RowPolicy::SkipAndLog).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(registry.course(3570119).unwrap().short_code, "CS101");
        assert_eq!(registry.course(3580105).unwrap().name, "Data Structures");
    }

    #[test]
    fn test_duplicate_code_keeps_last_row() {
        let input = "\
numeric_course_code,course_code,course_name
3570119,CS101,Old Name
3570119,CS101,New Name
";
        let mut registry = Registry::new();
        let loaded = load_courses(input.as_bytes(), &mut registry, RowPolicy::SkipAndLog).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(registry.course_count(), 1);
        assert_eq!(registry.course(3570119).unwrap().name, "New Name");
    }
}
