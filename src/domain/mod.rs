//! Domain layer: models, DB queries and the store abstraction

pub mod store;
pub mod twitter;
pub mod users;
