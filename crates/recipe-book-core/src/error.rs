//! Error types

use thiserror::Error;

/// Rejected login or registration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password left empty
    #[error("username and password are required")]
    MissingCredentials,

    /// Session state was torn down before the request ran
    #[error("session state unavailable")]
    Unavailable,
}

/// Key-value store failures
#[derive(Error, Debug)]
pub enum StorageError {
    /// No storage backend reachable (e.g. localStorage disabled)
    #[error("Storage unavailable")]
    Unavailable,

    /// The backend refused the operation
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Value could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Invalid catalog contents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),
}

/// Rejected view transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
