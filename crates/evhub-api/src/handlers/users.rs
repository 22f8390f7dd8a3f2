//! Account creation, token issuance and the caller's own profile

use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use evhub_core::domain::Principal;

use crate::dto::{CreateUserRequest, TokenRequest, TokenResponse, UpdateProfileRequest, UserRepresentation};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /api/user/create/
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRepresentation>), ApiError> {
    payload.validate()?;
    let user = state.users.create_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/user/token/
pub async fn create_token(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.users.issue_token(&payload.email, &payload.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// GET /api/user/me/
pub async fn me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<UserRepresentation>, ApiError> {
    let user = state.users.get(principal.user_id).await?;
    Ok(Json(user.into()))
}

/// PUT/PATCH /api/user/me/
pub async fn update_me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<Json<UserRepresentation>, ApiError> {
    let user = state.users.update_profile(principal.user_id, payload.into()).await?;
    Ok(Json(user.into()))
}
