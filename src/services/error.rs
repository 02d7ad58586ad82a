//! Error handling utilities for route handlers
//!
//! Every failure leaves the API as a JSON body of the form
//! `{"error": "<message>"}` with a status picked by [`ApiError::status`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::domain::twitter::validate::ContentError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be bound to the expected shape
    #[error("{0}")]
    Binding(String),
    /// Path or query parameter could not be parsed
    #[error("{0}")]
    Parse(String),
    #[error(transparent)]
    Validation(#[from] ContentError),
    #[error("Not authenticated.")]
    Unauthenticated,
    #[error("Not authorized.")]
    Forbidden,
    #[error("{0} not found.")]
    NotFound(&'static str),
    /// Details are logged, never returned
    #[error("Internal server error.")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Binding(_) | ApiError::Parse(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Extension trait for logging errors and converting to ApiError
pub trait LogErr<T> {
    /// Log error with context and return ApiError::Internal
    fn log_500(self, context: &str) -> Result<T, ApiError>;

    /// Log error with context and return a custom ApiError
    fn log_status(self, context: &str, err: ApiError) -> Result<T, ApiError>;
}

impl<T, E: std::fmt::Display> LogErr<T> for Result<T, E> {
    fn log_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|e| {
            tracing::error!(error = %e, "{}", context);
            ApiError::Internal
        })
    }

    fn log_status(self, context: &str, err: ApiError) -> Result<T, ApiError> {
        self.map_err(|e| {
            tracing::debug!(error = %e, status = %err.status(), "{}", context);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Binding("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Parse("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Validation(ContentError::Empty).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound("Tweet").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let (status, body) = body_json(ApiError::Forbidden).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "error": "Not authorized." }));

        let (status, body) = body_json(ApiError::NotFound("Tweet")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Tweet not found.");
    }

    #[tokio::test]
    async fn test_log_500_hides_details() {
        let result: Result<(), &str> = Err("connection refused on 10.0.0.3");
        let err = result.log_500("Fetch tweet error").unwrap_err();
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error.");
    }
}
