//! Postgres-backed store built on the query functions in `domain`

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::{Page, Paged, StoreError, TweetStore};
use crate::domain::twitter::{Tweet, tweets};
use crate::domain::users::{self, User};

#[derive(Clone)]
pub struct PgTweetStore {
    db: PgPool,
}

impl PgTweetStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.db).await
    }
}

#[async_trait]
impl TweetStore for PgTweetStore {
    async fn add_tweet(&self, user_id: i64, content: &str) -> Result<Tweet, StoreError> {
        Ok(tweets::insert_tweet(&self.db, user_id, content, Utc::now()).await?)
    }

    async fn fetch_tweet(&self, tweet_id: i64) -> Result<Option<Tweet>, StoreError> {
        Ok(tweets::get_tweet_by_id(&self.db, tweet_id).await?)
    }

    async fn list_tweets(&self, page: Page) -> Result<Paged<Tweet>, StoreError> {
        let total = tweets::count_tweets(&self.db).await?;
        let items = tweets::list_tweets_paginated(&self.db, page.limit, page.offset).await?;

        Ok(Paged { items, total })
    }

    async fn list_tweets_by_user(
        &self,
        user_id: i64,
        page: Page,
    ) -> Result<Paged<Tweet>, StoreError> {
        let total = tweets::count_tweets_by_user(&self.db, user_id).await?;
        let items =
            tweets::list_tweets_by_user_paginated(&self.db, user_id, page.limit, page.offset)
                .await?;

        Ok(Paged { items, total })
    }

    async fn update_tweet(&self, tweet: &Tweet) -> Result<Option<Tweet>, StoreError> {
        Ok(tweets::update_tweet_content(
            &self.db,
            tweet.id,
            tweet.user_id,
            &tweet.content,
            tweet.updated_at,
        )
        .await?)
    }

    async fn delete_tweet(&self, tweet: &Tweet) -> Result<bool, StoreError> {
        Ok(tweets::delete_tweet(&self.db, tweet.id, tweet.user_id).await?)
    }

    async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        Ok(users::get_user_by_id(&self.db, user_id).await?)
    }
}
