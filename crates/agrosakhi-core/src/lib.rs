//! AgroSakhi Core Library
//!
//! The storage engine behind the dashboard API: the storage port traits and
//! the in-memory implementation seeded with the demo dataset.

// Re-export pure types from agrosakhi-types
pub use agrosakhi_types::*;

pub mod error;
pub mod ports;
pub mod storage;

pub use error::{Result, StorageError};
pub use ports::Storage;
pub use storage::MemStorage;
