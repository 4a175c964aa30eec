//! Search Query Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Availability search parameters.
///
/// `location` and `cuisine` are optional filters; empty or whitespace-only
/// strings are treated as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub date: NaiveDate,
    /// Requested time as "HH:MM"
    pub time: String,
    pub party_size: i32,
    pub location: Option<String>,
    pub cuisine: Option<String>,
}
