//! Convenience result type alias for the Forum API.

use crate::error::AppError;

/// A specialized `Result` type for Forum API operations.
pub type AppResult<T> = Result<T, AppError>;
