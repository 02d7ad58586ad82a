//! Extractors that turn axum rejections into `ApiError` JSON bodies

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::Deserialize;

use crate::domain::store::Page;
use crate::services::error::ApiError;

/// `Json<T>` whose rejection is a 400 `ApiError::Binding`
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Binding(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}

/// A single numeric id taken from the path
pub struct IdParam(pub i64);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Parse(rejection.body_text()))?;

        parse_id(&raw).map(IdParam)
    }
}

/// Ids are positive integers
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Parse("Not valid ID.".to_string()))
}

#[derive(Debug, Deserialize)]
struct PageParams {
    limit: Option<i64>,
    offset: Option<i64>,
}

/// `?limit=&offset=` query parameters, defaulted and clamped
pub struct Pagination(pub Page);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Parse(rejection.body_text()))?;

        if params.offset.is_some_and(|offset| offset < 0) {
            return Err(ApiError::Parse("offset must not be negative".to_string()));
        }

        Ok(Pagination(Page::clamped(params.limit, params.offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        for bad in ["abc", "", "0", "-3", "1.5", "99999999999999999999"] {
            let err = parse_id(bad).unwrap_err();
            assert_eq!(err.to_string(), "Not valid ID.", "input {bad:?}");
        }
    }
}
