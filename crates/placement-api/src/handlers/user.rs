// ============================================================================
// Placement API - User Handlers
// File: crates/placement-api/src/handlers/user.rs
// ============================================================================
//! User store endpoints. Login only verifies the stored credential; no
//! token or session is issued.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use placement_core::services::CreateUserInput;

use crate::dto::{CreateUserRequest, LoginRequest, UserResponse};
use crate::error::{parse_id, ApiError, ApiResult};
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// POST /user/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<UserResponse>> {
    let Json(payload) = payload?;
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    let user = state
        .users
        .login(payload.username.trim(), &payload.password)
        .await?;
    Ok(ApiResponse::success(user.into()))
}

/// POST /user/create
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<UserResponse>> {
    let Json(payload) = payload?;
    let input = CreateUserInput::try_from(payload)?;
    let user = state.users.create(input).await?;
    Ok(ApiResponse::success(user.into()))
}

/// GET /user/list
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(ApiResponse::success(
        users.into_iter().map(Into::into).collect(),
    ))
}

/// DELETE /user/delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    let id = parse_id(&id)?;
    state.users.delete(&id).await?;
    Ok(ApiResponse::success(MessageResponse::new(
        "User deleted successfully",
    )))
}
