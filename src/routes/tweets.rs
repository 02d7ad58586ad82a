//! Tweet CRUD endpoints (/tweets/*, /users/{user_id}/tweets)

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::AppState;
use crate::domain::store::{Page, Paged};
use crate::domain::twitter::Tweet;
use crate::domain::twitter::validate::validate_content;
use crate::services::error::{ApiError, LogErr};

use super::auth::CurrentUser;
use super::dto::{
    CreateTweetRequest, MessageResponse, TweetFetchedResponse, TweetListResponse, TweetResponse,
    TweetWrittenResponse, UpdateTweetRequest,
};
use super::extract::{IdParam, JsonBody, Pagination};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/tweets",
            get(get_all_tweets)
                .post(create_tweet)
                .put(update_tweet)
                .patch(update_tweet),
        )
        .route("/tweets/me", get(get_current_user_tweets))
        .route("/tweets/{tweet_id}", get(get_tweet_by_id).delete(delete_tweet))
        .route("/users/{user_id}/tweets", get(get_tweets_by_user_id))
}

fn list_response(msg: &'static str, paged: Paged<Tweet>, page: Page) -> TweetListResponse {
    let has_more = paged.has_more(page);

    TweetListResponse {
        msg,
        tweets: paged.items.into_iter().map(TweetResponse::from).collect(),
        total: paged.total,
        has_more,
    }
}

/// Load a tweet and make sure `user_id` owns it
async fn fetch_owned_tweet(
    state: &AppState,
    tweet_id: i64,
    user_id: i64,
) -> Result<Tweet, ApiError> {
    let tweet = state
        .store
        .fetch_tweet(tweet_id)
        .await
        .log_500("Fetch tweet error")?
        .ok_or(ApiError::NotFound("Tweet"))?;

    if !tweet.is_owned_by(user_id) {
        warn!(tweet_id, user_id, owner_id = tweet.user_id, "ownership check failed");
        return Err(ApiError::Forbidden);
    }

    Ok(tweet)
}

/// POST /tweets - Create a tweet owned by the caller
///
/// The body is bound before the caller is resolved, so a malformed body is
/// a 400 even without credentials.
async fn create_tweet(
    State(state): State<Arc<AppState>>,
    current_user: Result<CurrentUser, ApiError>,
    JsonBody(req): JsonBody<CreateTweetRequest>,
) -> Result<Json<TweetWrittenResponse>, ApiError> {
    let CurrentUser(user) = current_user?;
    validate_content(&req.content)?;

    let tweet = state
        .store
        .add_tweet(user.id, &req.content)
        .await
        .log_500("Add tweet error")?;

    info!(tweet_id = tweet.id, user_id = user.id, "tweet created");

    Ok(Json(TweetWrittenResponse {
        msg: "Tweet created successfully",
        tweets: tweet.into(),
    }))
}

/// GET /tweets/me - List the caller's tweets with pagination
async fn get_current_user_tweets(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Pagination(page): Pagination,
) -> Result<Json<TweetListResponse>, ApiError> {
    let paged = state
        .store
        .list_tweets_by_user(user.id, page)
        .await
        .log_500("List current user tweets error")?;

    Ok(Json(list_response(
        "getCurrentUserTweets fetched successfully",
        paged,
        page,
    )))
}

/// GET /tweets/{tweet_id} - Fetch a single tweet
async fn get_tweet_by_id(
    State(state): State<Arc<AppState>>,
    IdParam(tweet_id): IdParam,
) -> Result<Json<TweetFetchedResponse>, ApiError> {
    let tweet = state
        .store
        .fetch_tweet(tweet_id)
        .await
        .log_500("Fetch tweet error")?
        .ok_or(ApiError::NotFound("Tweet"))?;

    Ok(Json(TweetFetchedResponse {
        msg: "fetch tweet by id",
        tweet: tweet.into(),
    }))
}

/// GET /tweets - List all tweets with pagination
async fn get_all_tweets(
    State(state): State<Arc<AppState>>,
    Pagination(page): Pagination,
) -> Result<Json<TweetListResponse>, ApiError> {
    let paged = state
        .store
        .list_tweets(page)
        .await
        .log_500("List tweets error")?;

    Ok(Json(list_response("getTweets fetched successfully", paged, page)))
}

/// GET /users/{user_id}/tweets - List one user's tweets with pagination
async fn get_tweets_by_user_id(
    State(state): State<Arc<AppState>>,
    IdParam(user_id): IdParam,
    Pagination(page): Pagination,
) -> Result<Json<TweetListResponse>, ApiError> {
    let paged = state
        .store
        .list_tweets_by_user(user_id, page)
        .await
        .log_500("List tweets by user error")?;

    Ok(Json(list_response(
        "fetchTweetsByUserId fetched successfully",
        paged,
        page,
    )))
}

/// PUT/PATCH /tweets - Edit the content of one of the caller's tweets
async fn update_tweet(
    State(state): State<Arc<AppState>>,
    current_user: Result<CurrentUser, ApiError>,
    JsonBody(req): JsonBody<UpdateTweetRequest>,
) -> Result<Json<TweetWrittenResponse>, ApiError> {
    let CurrentUser(user) = current_user?;

    // Ownership is decided before content, so non-owners always get 403
    let mut tweet = fetch_owned_tweet(&state, req.id, user.id).await?;
    validate_content(&req.content)?;

    tweet.content = req.content;
    tweet.updated_at = Utc::now();

    // No locking: concurrent edits of the same tweet are last-write-wins
    let updated = state
        .store
        .update_tweet(&tweet)
        .await
        .log_500("Update tweet error")?
        .ok_or(ApiError::NotFound("Tweet"))?;

    info!(tweet_id = updated.id, user_id = user.id, "tweet updated");

    Ok(Json(TweetWrittenResponse {
        msg: "Tweet updated successfully.",
        tweets: updated.into(),
    }))
}

/// DELETE /tweets/{tweet_id} - Delete one of the caller's tweets
async fn delete_tweet(
    State(state): State<Arc<AppState>>,
    IdParam(tweet_id): IdParam,
    CurrentUser(user): CurrentUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let tweet = fetch_owned_tweet(&state, tweet_id, user.id).await?;

    let deleted = state
        .store
        .delete_tweet(&tweet)
        .await
        .log_500("Delete tweet error")?;

    if !deleted {
        return Err(ApiError::NotFound("Tweet"));
    }

    info!(tweet_id, user_id = user.id, "tweet deleted");

    Ok(Json(MessageResponse {
        msg: "Tweet deleted successfully.",
    }))
}
