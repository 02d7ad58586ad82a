//! Application constants

/// Default page size for paginated list endpoints
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Maximum page size for paginated list endpoints
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum tweet length in characters
pub const MAX_TWEET_LENGTH: usize = 280;

/// Access token lifetime in minutes
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 10;

/// Name of the cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Request body limit for tweet payloads (64 KB)
pub const MAX_BODY_SIZE: usize = 64 * 1024;
