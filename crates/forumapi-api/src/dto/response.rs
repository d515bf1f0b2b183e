//! Response DTOs.

use serde::{Deserialize, Serialize};

use forumapi_entity::user::RegisteredUser;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `"success"`.
    pub status: String,
    /// Response data, omitted when there is none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a successful response without data.
    pub fn empty() -> Self {
        Self {
            status: "success".to_string(),
            data: None,
        }
    }
}

/// Failure response body.
///
/// `status` is `"fail"` when the caller is at fault and `"error"` when the
/// server is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFailure {
    /// `"fail"` or `"error"`.
    pub status: String,
    /// Human-readable message.
    pub message: String,
}

impl ApiFailure {
    /// Creates a client failure body.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            message: message.into(),
        }
    }

    /// Creates a server error body.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    /// Newly signed access token.
    pub access_token: String,
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserResponse {
    /// The created user.
    pub added_user: RegisteredUser,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database status.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_success_omits_data() {
        let body = serde_json::to_value(ApiResponse::empty()).unwrap();
        assert_eq!(body, json!({ "status": "success" }));
    }

    #[test]
    fn test_access_token_is_camel_case() {
        let body = serde_json::to_value(ApiResponse::ok(AccessTokenResponse {
            access_token: "abc".to_string(),
        }))
        .unwrap();
        assert_eq!(
            body,
            json!({ "status": "success", "data": { "accessToken": "abc" } })
        );
    }
}
