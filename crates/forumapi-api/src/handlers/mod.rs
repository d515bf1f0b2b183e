//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod user;

use forumapi_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found("Route not found"))
}
