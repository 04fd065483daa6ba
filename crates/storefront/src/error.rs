//! Unified error handling.
//!
//! Provides a unified `AppError` for callers that compose multiple stores and
//! the catalog. Failures are always scoped to the page or feature attempting
//! the operation; nothing here is fatal to the session as a whole.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Application-level error type for the storefront state layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistent storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog read failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
