use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::{info, warn};

use twit_api::config::Config;
use twit_api::domain::store::{InMemoryTweetStore, PgTweetStore, TweetStore};
use twit_api::services::session;
use twit_api::{AppState, build_app, telemetry};

#[tokio::main]
async fn main() {
    telemetry::init();

    let config = Config::from_env();

    let store: Arc<dyn TweetStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            let store = PgTweetStore::new(pool);
            store.migrate().await.expect("Failed to run migrations");
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set; using in-memory store");
            let store = InMemoryTweetStore::new();

            // Seed a user so the dev server is usable without a login flow
            let demo = store.seed_user("demo").expect("Failed to seed demo user");
            let token = session::create_access_token(demo.id, config.jwt_secret.as_bytes())
                .expect("Failed to mint demo token");
            info!(user_id = demo.id, %token, "seeded demo user");

            Arc::new(store)
        }
    };

    let app = build_app(AppState::new(store, config.jwt_secret.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.expect("Server failed");
}
