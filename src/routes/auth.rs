//! Request authentication: resolves the caller from a JWT

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::AppState;
use crate::constants::ACCESS_TOKEN_COOKIE;
use crate::domain::users::User;
use crate::services::error::{ApiError, LogErr};
use crate::services::session;

// ============================================================================
// Auth Extractor - validates the JWT and extracts user_id
// ============================================================================

/// Extractor that validates the access token and returns the user_id.
///
/// The token is read from `Authorization: Bearer <token>` first, then from
/// the `access_token` cookie.
pub struct AuthUser(pub i64);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = access_token(&parts.headers).ok_or(ApiError::Unauthenticated)?;

        let user_id = session::validate_access_token(&token, &state.jwt_secret)
            .log_status("JWT validation failed", ApiError::Unauthenticated)?;

        Ok(AuthUser(user_id))
    }
}

fn access_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    bearer.or_else(|| {
        CookieJar::from_headers(headers)
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
    })
}

// ============================================================================
// Current user - AuthUser plus a store lookup
// ============================================================================

/// The authenticated caller, loaded from the store
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user_id) = AuthUser::from_request_parts(parts, state).await?;

        // A valid JWT for a deleted user is still unauthorized
        let user = state
            .store
            .fetch_user(user_id)
            .await
            .log_500("Fetch current user error")?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header::COOKIE};

    #[test]
    fn test_bearer_token_preferred() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(COOKIE, HeaderValue::from_static("access_token=xyz"));
        assert_eq!(access_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn test_cookie_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; access_token=xyz"));
        assert_eq!(access_token(&headers).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_missing_or_malformed() {
        assert_eq!(access_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert_eq!(access_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(access_token(&headers), None);
    }
}
