//! Twitter domain models

mod tweet;

pub use tweet::Tweet;
