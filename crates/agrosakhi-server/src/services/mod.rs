//! Business logic services

pub mod assistant;
pub mod llm;

pub use assistant::Assistant;
pub use llm::LanguageModel;
