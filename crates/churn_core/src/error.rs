//! Error types for the churn core crate.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, ChurnError>;

/// Main error type for core operations.
#[derive(Error, Debug)]
pub enum ChurnError {
    /// A column name is not part of the fixed schema
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
