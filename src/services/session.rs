//! Session management: JWT access tokens

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::ACCESS_TOKEN_EXPIRY_MINUTES;

/// JWT claims for access tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id as string
    pub exp: i64,    // expiry timestamp
    pub iat: i64,    // issued at
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    Expired,
}

/// Create a JWT access token valid for ACCESS_TOKEN_EXPIRY_MINUTES
pub fn create_access_token(user_id: i64, secret: &[u8]) -> Result<String, SessionError> {
    let now = Utc::now();
    let exp = now + Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|_| SessionError::InvalidToken)
}

/// Validate a JWT access token and return the user_id
pub fn validate_access_token(token: &str, secret: &[u8]) -> Result<i64, SessionError> {
    // HS256 only, to rule out algorithm confusion
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub", "iat"]);

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| {
            tracing::debug!(error = ?e, "JWT decode error");
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::InvalidToken,
            }
        })?;

    token_data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| SessionError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    fn sign(claims: &Claims) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(SECRET)).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let token = create_access_token(42, SECRET).unwrap();
        assert_eq!(validate_access_token(&token, SECRET), Ok(42));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_access_token(42, SECRET).unwrap();
        assert_eq!(
            validate_access_token(&token, b"other-secret"),
            Err(SessionError::InvalidToken)
        );
    }

    #[test]
    fn test_expired_rejected() {
        let past = Utc::now() - Duration::hours(1);
        let token = sign(&Claims {
            sub: "42".into(),
            exp: past.timestamp(),
            iat: (past - Duration::minutes(10)).timestamp(),
        });
        assert_eq!(
            validate_access_token(&token, SECRET),
            Err(SessionError::Expired)
        );
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let now = Utc::now();
        let token = sign(&Claims {
            sub: "alice".into(),
            exp: (now + Duration::minutes(5)).timestamp(),
            iat: now.timestamp(),
        });
        assert_eq!(
            validate_access_token(&token, SECRET),
            Err(SessionError::InvalidToken)
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(
            validate_access_token("not.a.jwt", SECRET),
            Err(SessionError::InvalidToken)
        );
    }
}
