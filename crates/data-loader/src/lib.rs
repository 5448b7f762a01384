//! CSV ingestion for the academic records tables.
//!
//! Each loader reads one tabular file, constructs the corresponding
//! entities, and hands the core a populated table. Malformed rows are
//! handled per [`RowPolicy`]; the core never depends on which policy a
//! loader ran with.

pub mod courses;
pub mod curriculum;
pub mod departments;
pub mod error;
pub mod policy;
pub mod students;

pub use courses::{load_courses, load_courses_from_path};
pub use curriculum::{load_curriculum, load_curriculum_from_path};
pub use departments::{load_departments, load_departments_from_path};
pub use error::LoadError;
pub use policy::RowPolicy;
pub use students::{load_students, load_students_from_path};
