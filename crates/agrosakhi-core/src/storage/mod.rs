//! Storage layer
//!
//! One [`Table`] per entity type, each with its own id counter and lock.

mod entities;
pub mod memory;
pub mod seed;
pub mod table;

pub use memory::MemStorage;
pub use table::{Entity, Table};
