//! API request and response DTOs for tweets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::twitter::Tweet;

/// POST /tweets body. Ids, owner and timestamps are server-assigned.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTweetRequest {
    pub content: String,
}

/// PUT/PATCH /tweets body. The owner can't be changed through an update.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTweetRequest {
    pub id: i64,
    pub content: String,
}

/// Tweet API response
#[derive(Debug, Clone, Serialize)]
pub struct TweetResponse {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tweet> for TweetResponse {
    fn from(t: Tweet) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            content: t.content,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Create/update envelope; the payload key is `tweets` for client compatibility
#[derive(Debug, Serialize)]
pub struct TweetWrittenResponse {
    pub msg: &'static str,
    pub tweets: TweetResponse,
}

#[derive(Debug, Serialize)]
pub struct TweetFetchedResponse {
    pub msg: &'static str,
    pub tweet: TweetResponse,
}

#[derive(Debug, Serialize)]
pub struct TweetListResponse {
    pub msg: &'static str,
    pub tweets: Vec<TweetResponse>,
    pub total: i64,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_server_fields() {
        let ok: CreateTweetRequest = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(ok.content, "hi");

        for body in [
            r#"{"content":"hi","id":5}"#,
            r#"{"content":"hi","user_id":2}"#,
            r#"{"content":"hi","created_at":"2025-01-01T00:00:00Z"}"#,
        ] {
            assert!(serde_json::from_str::<CreateTweetRequest>(body).is_err(), "{body}");
        }
    }

    #[test]
    fn test_update_rejects_owner_field() {
        let ok: UpdateTweetRequest =
            serde_json::from_str(r#"{"id":3,"content":"edited"}"#).unwrap();
        assert_eq!((ok.id, ok.content.as_str()), (3, "edited"));

        assert!(
            serde_json::from_str::<UpdateTweetRequest>(r#"{"id":3,"content":"x","user_id":9}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<UpdateTweetRequest>(r#"{"content":"x"}"#).is_err());
    }
}
