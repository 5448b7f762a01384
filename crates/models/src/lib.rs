//! Domain types for the academic records system: catalog courses,
//! departments, curriculum entries, letter grades, and student identity.

pub mod course;
pub mod curriculum;
pub mod department;
pub mod grade;
pub mod student;
