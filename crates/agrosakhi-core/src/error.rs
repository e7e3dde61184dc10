//! Error types for the storage engine
//!
//! A missing record is not an error: lookups return `Ok(None)` and callers
//! decide what absence means.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Identifier space exhausted for table {0}")]
    IdExhausted(&'static str),
}
