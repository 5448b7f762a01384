use serde::{Deserialize, Serialize};

/// An academic department, immutable once loaded
///
/// Students reference departments by id only; there is no cascading
/// behavior between the two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
}

impl Department {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
