//! Data models
//!
//! Shared between the engine crate and API surfaces (via JSON).
//! Catalog and account IDs are `i64` (snowflake); booking IDs are UUID strings.

pub mod booking;
pub mod dining_table;
pub mod hours;
pub mod restaurant;
pub mod search;
pub mod user;

// Re-exports
pub use booking::*;
pub use dining_table::*;
pub use hours::*;
pub use restaurant::*;
pub use search::*;
pub use user::*;
