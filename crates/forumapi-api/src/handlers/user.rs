//! User registration handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use forumapi_entity::user::RegisterUser;

use crate::dto::response::{AddedUserResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /users
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<ApiResponse<AddedUserResponse>>), ApiError> {
    let req = RegisterUser::from_json(&body)?;
    let added_user = state.user_service.register(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AddedUserResponse { added_user })),
    ))
}
