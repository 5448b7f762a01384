use crate::{error::LoadError, policy::RowPolicy};
use models::department::Department;
use registry::Registry;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

#[derive(Debug, Deserialize)]
struct DepartmentRow {
    dept_id: u32,
    dept_name: String,
}

/// Loads department records into the registry.
///
/// # Arguments
/// * `reader` - CSV input with a `dept_id,dept_name` header row
/// * `registry` - Table owner to populate
/// * `policy` - What to do with rows that fail to parse
///
/// # Returns
/// The number of departments loaded.
pub fn load_departments<R: Read>(
    reader: R,
    registry: &mut Registry,
    policy: RowPolicy,
) -> Result<usize, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut loaded = 0;

    for (record, row) in csv_reader.deserialize::<DepartmentRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                policy.admit("departments", record + 1, err.into())?;
                continue;
            }
        };

        registry.insert_department(Department::new(row.dept_id, row.dept_name));
        loaded += 1;
    }

    Ok(loaded)
}

/// Opens `path` and loads department records from it
pub fn load_departments_from_path(
    path: impl AsRef<Path>,
    registry: &mut Registry,
    policy: RowPolicy,
) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    load_departments(file, registry, policy)
}
