//! Tweet domain - DB queries for tweets
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&PgPool` (for standalone queries) and `&mut PgConnection` (for transactions).

use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use super::super::models::Tweet;

/// Insert a tweet for a user; id and timestamps are assigned here
pub async fn insert_tweet<'e, E>(
    executor: E,
    user_id: i64,
    content: &str,
    now: DateTime<Utc>,
) -> Result<Tweet, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        INSERT INTO tweets (user_id, content, created_at, updated_at)
        VALUES ($1, $2, $3, $3)
        RETURNING id, user_id, content, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(content)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Get a tweet by ID
pub async fn get_tweet_by_id<'e, E>(
    executor: E,
    tweet_id: i64,
) -> Result<Option<Tweet>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        SELECT id, user_id, content, created_at, updated_at
        FROM tweets
        WHERE id = $1
        "#,
    )
    .bind(tweet_id)
    .fetch_optional(executor)
    .await
}

/// Count all tweets for pagination
pub async fn count_tweets<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tweets")
        .fetch_one(executor)
        .await?;

    Ok(count)
}

/// List all tweets with pagination, oldest first
pub async fn list_tweets_paginated<'e, E>(
    executor: E,
    limit: i64,
    offset: i64,
) -> Result<Vec<Tweet>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        SELECT id, user_id, content, created_at, updated_at
        FROM tweets
        ORDER BY created_at ASC, id ASC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

/// Count a user's tweets for pagination
pub async fn count_tweets_by_user<'e, E>(executor: E, user_id: i64) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tweets WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await?;

    Ok(count)
}

/// List a user's tweets with pagination, oldest first
pub async fn list_tweets_by_user_paginated<'e, E>(
    executor: E,
    user_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Tweet>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        SELECT id, user_id, content, created_at, updated_at
        FROM tweets
        WHERE user_id = $1
        ORDER BY created_at ASC, id ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

/// Update tweet content. Only matches while the owner is unchanged;
/// returns None if the row is gone.
pub async fn update_tweet_content<'e, E>(
    executor: E,
    tweet_id: i64,
    user_id: i64,
    content: &str,
    updated_at: DateTime<Utc>,
) -> Result<Option<Tweet>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        UPDATE tweets
        SET content = $3, updated_at = $4
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, content, created_at, updated_at
        "#,
    )
    .bind(tweet_id)
    .bind(user_id)
    .bind(content)
    .bind(updated_at)
    .fetch_optional(executor)
    .await
}

/// Delete a tweet owned by the given user
pub async fn delete_tweet<'e, E>(
    executor: E,
    tweet_id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        r#"
        DELETE FROM tweets
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(tweet_id)
    .bind(user_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
