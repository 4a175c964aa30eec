//! Shared types for the BookTable platform
//!
//! Data models and utility types used by the engine crate and, in a full
//! deployment, by API surfaces serving the same JSON shapes.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::Timestamp;
