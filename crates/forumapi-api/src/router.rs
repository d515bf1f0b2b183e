//! Route definitions for the Forum API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(health_routes())
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::logging::request_logging)),
        )
        .with_state(state)
}

/// Login, refresh, logout
fn auth_routes() -> Router<AppState> {
    Router::new().route(
        "/authentications",
        post(handlers::auth::login)
            .put(handlers::auth::refresh)
            .delete(handlers::auth::logout),
    )
}

/// Registration
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(handlers::user::register))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
