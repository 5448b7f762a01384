use data_loader::{
    LoadError, RowPolicy, load_courses_from_path, load_curriculum_from_path,
    load_departments_from_path, load_students_from_path,
};
use log::{error, info};
use registry::Registry;
use std::{env, path::Path, process::ExitCode};

/// Environment variable naming the directory that holds the record files
const DATA_DIR_VAR: &str = "RECORDS_DATA_DIR";

fn import(data_dir: &Path, registry: &mut Registry) -> Result<(), LoadError> {
    let departments = load_departments_from_path(
        data_dir.join("departments.csv"),
        registry,
        RowPolicy::SkipAndLog,
    )?;
    let courses = load_courses_from_path(
        data_dir.join("courses.csv"),
        registry,
        RowPolicy::SkipAndLog,
    )?;

    // Grade validation runs against the curriculum table, so a bad row
    // aborts the load instead of being skipped.
    let curriculum = load_curriculum_from_path(
        data_dir.join("curriculum.csv"),
        registry,
        RowPolicy::Strict,
    )?;

    let students =
        load_students_from_path(data_dir.join("students.csv"), RowPolicy::SkipAndLog)?;

    info!(
        "loaded {departments} departments, {courses} courses, {curriculum} curriculum entries, {} students",
        students.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let data_dir = env::var(DATA_DIR_VAR).unwrap_or_else(|_| "./data".to_string());
    let mut registry = Registry::new();

    match import(Path::new(&data_dir), &mut registry) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("import from '{data_dir}' failed: {err}");
            ExitCode::FAILURE
        }
    }
}
