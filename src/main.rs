mod config;
mod errors;
mod handlers;
mod log_query;
mod models;
mod services;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::Config;
use crate::services::{DynStore, RedisStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // One Redis client for the lifetime of the process, shared by all requests
    let redis_client = Arc::new(
        redis::Client::open(config.redis.url.clone()).expect("Failed to connect to Redis"),
    );
    let store: DynStore = Arc::new(RedisStore::new(redis_client));

    let app = handlers::router(store)
        // Landing page and assets
        .route_service("/", ServeFile::new("static/index.html"))
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
