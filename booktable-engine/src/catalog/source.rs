//! Catalog source boundary
//!
//! Async provider of restaurant records. The service layer only sees this
//! trait, so the directory behind it can be swapped without touching any
//! caller.

use async_trait::async_trait;
use thiserror::Error;

use shared::models::Restaurant;

use crate::core::error::AppError;

/// Source error types
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(msg) => AppError::NotFound(msg),
            SourceError::Duplicate(msg) => AppError::Conflict(msg),
            SourceError::Validation(msg) => AppError::Validation(msg),
            SourceError::Unavailable(msg) => AppError::Unavailable(msg),
        }
    }
}

/// Asynchronous catalog of restaurant records.
///
/// `fetch_all` returns records in a stable insertion order; the service
/// cache mirrors that order so search results stay deterministic. Every
/// method may fail with [`SourceError::Unavailable`] when the backing
/// directory cannot be reached.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All records, insertion order
    async fn fetch_all(&self) -> SourceResult<Vec<Restaurant>>;

    /// Single record by ID, `None` when absent
    async fn fetch_by_id(&self, id: i64) -> SourceResult<Option<Restaurant>>;

    /// Insert a new record; the ID must not already exist
    async fn insert(&self, restaurant: Restaurant) -> SourceResult<Restaurant>;

    /// Replace an existing record in place
    async fn update(&self, restaurant: Restaurant) -> SourceResult<Restaurant>;

    /// Delete a record by ID
    async fn remove(&self, id: i64) -> SourceResult<()>;
}
