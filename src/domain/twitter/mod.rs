//! Twitter domain - models and queries for tweets

pub mod models;
pub mod queries;
pub mod validate;

// Re-export models for convenience
pub use models::*;

pub use queries::tweets;
