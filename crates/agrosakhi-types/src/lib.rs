//! AgroSakhi Types - Pure type definitions shared by the storage engine and the HTTP layer
//!
//! This crate contains only serde data types with no async runtime dependencies.
//! JSON field names follow the camelCase contract of the dashboard client.

pub mod assistant;
pub mod catalog;
pub mod device;
pub mod market;
pub mod task;
pub mod user;
pub mod weather;

pub use assistant::*;
pub use catalog::*;
pub use device::*;
pub use market::*;
pub use task::*;
pub use user::*;
pub use weather::*;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the storage engine, unique per entity type
pub type EntityId = i32;

/// Display language of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hi,
    En,
}

impl Language {
    /// Resolve a client-supplied language code. Anything that is not English
    /// falls back to Hindi, the dashboard's primary language.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_ascii_lowercase()) {
            Some(c) if c == "en" || c == "english" => Language::En,
            _ => Language::Hi,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
