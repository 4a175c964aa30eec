//! Core module - configuration, application state, and error types

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::{AppState, ResourceVersions};
