use crate::{error::LoadError, policy::RowPolicy};
use models::student::StudentProfile;
use serde::Deserialize;
use std::{collections::HashMap, fs::File, io::Read, path::Path};

#[derive(Debug, Deserialize)]
struct StudentRow {
    id: u32,
    firstname: String,
    lastname: String,
    dept_id: u32,
}

/// Loads student identity records.
///
/// Students are not registry state; the resulting table is handed to
/// whatever owns the transcripts.
///
/// # Arguments
/// * `reader` - CSV input with an `id,firstname,lastname,dept_id` header row
/// * `policy` - What to do with rows that fail to parse
///
/// # Returns
/// A map from student id to profile; a duplicated id keeps the last row.
pub fn load_students<R: Read>(
    reader: R,
    policy: RowPolicy,
) -> Result<HashMap<u32, StudentProfile>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut students = HashMap::new();

    for (record, row) in csv_reader.deserialize::<StudentRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                policy.admit("students", record + 1, err.into())?;
                continue;
            }
        };

        students.insert(
            row.id,
            StudentProfile::new(row.id, row.firstname, row.lastname, row.dept_id),
        );
    }

    Ok(students)
}

/// Opens `path` and loads student records from it
pub fn load_students_from_path(
    path: impl AsRef<Path>,
    policy: RowPolicy,
) -> Result<HashMap<u32, StudentProfile>, LoadError> {
    let file = File::open(path)?;
    load_students(file, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_students() {
        let input = "\
id,firstname,lastname,dept_id
1,John,Doe,389
2,Jane,Smith,355
";
        let students = load_students(input.as_bytes(), RowPolicy::SkipAndLog).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[&1].full_name(), "Doe John");
        assert_eq!(students[&2].dept_id, 355);
    }

    #[test]
    fn test_missing_column_is_a_row_error() {
        let input = "\
id,firstname,lastname
1,John,Doe
";
        let result = load_students(input.as_bytes(), RowPolicy::Strict);
        assert!(matches!(result, Err(LoadError::Csv(_))));

        let students = load_students(input.as_bytes(), RowPolicy::SkipAndLog).unwrap();
        assert!(students.is_empty());
    }
}
