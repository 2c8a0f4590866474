//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by the item store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item carries the requested id
    #[error("item not found: {0}")]
    NotFound(String),
}
