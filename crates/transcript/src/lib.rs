//! The enrollment and grade-computation engine.
//!
//! A [`Student`] binds a point-in-time copy of the curriculum table,
//! records grades per semester against that snapshot, and keeps its
//! credit-hour and CGPA aggregates current on every mutation.

pub mod error;
pub mod semester;
pub mod student;

pub use error::RecordError;
pub use semester::SemesterRecord;
pub use student::Student;
