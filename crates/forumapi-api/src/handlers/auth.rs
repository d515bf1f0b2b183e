//! Auth handlers: login, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use forumapi_entity::authentication::{NewAuth, RefreshAuth, UserLogin};

use crate::dto::response::{AccessTokenResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /authentications
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<ApiResponse<NewAuth>>), ApiError> {
    let login = UserLogin::from_json(&body)?;
    let tokens = state.auth_service.login(&login).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tokens))))
}

/// PUT /authentications
pub async fn refresh(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<ApiResponse<AccessTokenResponse>>, ApiError> {
    let auth = RefreshAuth::from_json(&body)?;
    let access_token = state.auth_service.refresh(&auth).await?;

    Ok(Json(ApiResponse::ok(AccessTokenResponse { access_token })))
}

/// DELETE /authentications
pub async fn logout(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let auth = RefreshAuth::from_json(&body)?;
    state.auth_service.logout(&auth).await?;

    Ok(Json(ApiResponse::empty()))
}
