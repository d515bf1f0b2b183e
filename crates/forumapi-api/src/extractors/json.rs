//! Lenient JSON body extractor.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use forumapi_core::error::AppError;

use crate::error::ApiError;

/// The request body parsed as untyped JSON.
///
/// An empty body becomes [`Value::Null`] so payload builders report the
/// missing properties themselves. Anything that is not JSON is rejected as a
/// validation failure instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::validation(format!("Request body could not be read: {}", e.body_text()))
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Null));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|_| AppError::validation("Request body must be valid JSON").into())
    }
}
