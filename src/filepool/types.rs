/*!
 * File Pool Error Types
 * Structured, type-safe error handling for scratch-file operations
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File pool operation result
///
/// # Must Use
/// Pool operations can fail and must be handled to prevent data loss
#[must_use = "pool operations can fail and must be handled"]
pub type PoolResult<T> = Result<T, PoolError>;

/// File pool errors with structured, type-safe error handling
///
/// Serialization uses tagged enum pattern for type safety.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum PoolError {
    #[error("No file pool available: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File handle already closed")]
    Closed,

    #[error("Out of space")]
    OutOfSpace,
}

impl From<std::io::Error> for PoolError {
    fn from(err: std::io::Error) -> Self {
        PoolError::IoError(err.to_string())
    }
}
