//! /api/groups/

use axum::{extract::State, http::StatusCode, Extension, Json};

use evhub_core::domain::Principal;
use evhub_shared::EntityId;

use crate::dto::{GroupRepresentation, GroupRequest};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub async fn list_groups(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<GroupRepresentation>>, ApiError> {
    let groups = state.groups.list(&principal).await?;
    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

pub async fn create_group(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiJson(payload): ApiJson<GroupRequest>,
) -> Result<(StatusCode, Json<GroupRepresentation>), ApiError> {
    let group = state.groups.create(&principal, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}

pub async fn get_group(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<Json<GroupRepresentation>, ApiError> {
    let group = state.groups.retrieve(&principal, id).await?;
    Ok(Json(group.into()))
}

pub async fn update_group(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(payload): ApiJson<GroupRequest>,
) -> Result<Json<GroupRepresentation>, ApiError> {
    let group = state.groups.update(&principal, id, payload.into()).await?;
    Ok(Json(group.into()))
}

pub async fn delete_group(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.groups.delete(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
