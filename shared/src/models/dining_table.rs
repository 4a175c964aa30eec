//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity, embedded in its restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
}

/// Create dining table payload (ID assigned by the catalog service)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    pub capacity: i32,
}
