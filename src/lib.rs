//! HTTP API for creating, reading, editing and deleting tweets.

pub mod config;
pub mod constants;
pub mod domain;
pub mod routes;
pub mod services;
pub mod telemetry;

use axum::{Router, extract::DefaultBodyLimit};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::constants::MAX_BODY_SIZE;
use crate::domain::store::TweetStore;

/// Shared state handed to every handler
pub struct AppState {
    pub store: Arc<dyn TweetStore>,
    pub jwt_secret: Vec<u8>,
}

impl AppState {
    pub fn new(store: Arc<dyn TweetStore>, jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.into(),
        }
    }
}

/// Build the full application router
pub fn build_app(state: AppState) -> Router {
    routes::build_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
        .with_state(Arc::new(state))
}
