pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod params;
pub mod routes;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};

/// Assemble the service; `config` only shapes the middleware stack.
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let state: SharedState = Arc::new(AppState { pool });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
