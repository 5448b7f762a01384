//! Authoritative in-memory tables for the academic records system.
//!
//! A [`Registry`] owns the department, course, and curriculum tables
//! explicitly; loaders populate it and the transcript engine binds
//! snapshots from it. There is no process-wide shared state.

pub mod error;
mod tables;

pub use error::RegistryError;
pub use tables::Registry;
