//! # forumapi-api
//!
//! HTTP API layer for the Forum API built on Axum.
//!
//! Provides the authentication and registration endpoints, the response
//! envelope, request logging, the JSON body extractor, and the mapping from
//! [`AppError`](forumapi_core::AppError) to HTTP status codes.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_state;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
