use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use super::{Page, Paged, StoreError, TweetStore};
use crate::domain::twitter::Tweet;
use crate::domain::users::User;

#[derive(Debug, Default)]
struct Tables {
    // Keyed by id; ids are handed out in increasing order so iteration
    // order is insertion order.
    tweets: BTreeMap<i64, Tweet>,
    users: HashMap<i64, User>,
    next_tweet_id: i64,
    next_user_id: i64,
}

/// In-memory tweet store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryTweetStore {
    tables: RwLock<Tables>,
}

impl InMemoryTweetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and return it with its assigned id
    pub fn seed_user(&self, username: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        tables.next_user_id += 1;

        let user = User {
            id: tables.next_user_id,
            username: username.to_string(),
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    fn paginate<'a>(iter: impl Iterator<Item = &'a Tweet>, page: Page) -> Paged<Tweet> {
        let matching: Vec<&Tweet> = iter.collect();
        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Paged { items, total }
    }
}

#[async_trait]
impl TweetStore for InMemoryTweetStore {
    async fn add_tweet(&self, user_id: i64, content: &str) -> Result<Tweet, StoreError> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        tables.next_tweet_id += 1;

        let now = Utc::now();
        let tweet = Tweet {
            id: tables.next_tweet_id,
            user_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.tweets.insert(tweet.id, tweet.clone());

        Ok(tweet)
    }

    async fn fetch_tweet(&self, tweet_id: i64) -> Result<Option<Tweet>, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.tweets.get(&tweet_id).cloned())
    }

    async fn list_tweets(&self, page: Page) -> Result<Paged<Tweet>, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(Self::paginate(tables.tweets.values(), page))
    }

    async fn list_tweets_by_user(
        &self,
        user_id: i64,
        page: Page,
    ) -> Result<Paged<Tweet>, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(Self::paginate(
            tables.tweets.values().filter(|t| t.user_id == user_id),
            page,
        ))
    }

    async fn update_tweet(&self, tweet: &Tweet) -> Result<Option<Tweet>, StoreError> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;

        let Some(stored) = tables
            .tweets
            .get_mut(&tweet.id)
            .filter(|stored| stored.user_id == tweet.user_id)
        else {
            return Ok(None);
        };

        stored.content = tweet.content.clone();
        stored.updated_at = tweet.updated_at;

        Ok(Some(stored.clone()))
    }

    async fn delete_tweet(&self, tweet: &Tweet) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;

        let owned = tables
            .tweets
            .get(&tweet.id)
            .is_some_and(|stored| stored.user_id == tweet.user_id);
        if owned {
            tables.tweets.remove(&tweet.id);
        }

        Ok(owned)
    }

    async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.users.get(&user_id).cloned())
    }
}
