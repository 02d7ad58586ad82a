//! Persistence abstraction over tweets and users
//!
//! Route handlers only talk to `dyn TweetStore`, so the same router runs
//! against Postgres in production and the in-memory store in tests.

mod memory;
mod postgres;

pub use memory::InMemoryTweetStore;
pub use postgres::PgTweetStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::twitter::Tweet;
use crate::domain::users::User;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// A window into an ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Apply defaults and clamp `limit` into `1..=MAX_PAGE_SIZE`.
    /// Offsets below zero are treated as zero.
    pub fn clamped(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::clamped(None, None)
    }
}

/// A page of results plus the total row count of the full listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Paged<T> {
    pub fn has_more(&self, page: Page) -> bool {
        page.offset + (self.items.len() as i64) < self.total
    }
}

#[async_trait]
pub trait TweetStore: Send + Sync {
    /// Persist a new tweet for `user_id`, assigning id and timestamps
    async fn add_tweet(&self, user_id: i64, content: &str) -> Result<Tweet, StoreError>;

    async fn fetch_tweet(&self, tweet_id: i64) -> Result<Option<Tweet>, StoreError>;

    /// All tweets in insertion order
    async fn list_tweets(&self, page: Page) -> Result<Paged<Tweet>, StoreError>;

    /// One user's tweets in insertion order
    async fn list_tweets_by_user(
        &self,
        user_id: i64,
        page: Page,
    ) -> Result<Paged<Tweet>, StoreError>;

    /// Write `content` and `updated_at` of `tweet`. Matches on both id and
    /// owner; `None` means no such row exists anymore.
    async fn update_tweet(&self, tweet: &Tweet) -> Result<Option<Tweet>, StoreError>;

    /// Delete `tweet`, matching on both id and owner
    async fn delete_tweet(&self, tweet: &Tweet) -> Result<bool, StoreError>;

    async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        let page = Page::default();
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_page_clamps_limit() {
        assert_eq!(Page::clamped(Some(0), None).limit, 1);
        assert_eq!(Page::clamped(Some(-5), None).limit, 1);
        assert_eq!(Page::clamped(Some(1_000), None).limit, MAX_PAGE_SIZE);
        assert_eq!(Page::clamped(Some(20), Some(40)), Page { limit: 20, offset: 40 });
        assert_eq!(Page::clamped(None, Some(-3)).offset, 0);
    }

    #[test]
    fn test_has_more() {
        let page = Page::clamped(Some(2), Some(0));
        let paged = Paged { items: vec![1, 2], total: 3 };
        assert!(paged.has_more(page));

        let last = Page::clamped(Some(2), Some(2));
        let paged = Paged { items: vec![3], total: 3 };
        assert!(!paged.has_more(last));

        let empty = Paged::<i32> { items: vec![], total: 0 };
        assert!(!empty.has_more(Page::default()));
    }
}
