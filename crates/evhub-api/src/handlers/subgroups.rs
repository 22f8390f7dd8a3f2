//! /api/subgroups/

use axum::{extract::State, http::StatusCode, Extension, Json};

use evhub_core::domain::Principal;
use evhub_shared::EntityId;

use crate::dto::{SubGroupRepresentation, SubGroupRequest};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub async fn list_subgroups(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<SubGroupRepresentation>>, ApiError> {
    let subgroups = state.subgroups.list(&principal).await?;
    Ok(Json(subgroups.into_iter().map(Into::into).collect()))
}

pub async fn create_subgroup(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiJson(payload): ApiJson<SubGroupRequest>,
) -> Result<(StatusCode, Json<SubGroupRepresentation>), ApiError> {
    let subgroup = state.subgroups.create(&principal, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(subgroup.into())))
}

pub async fn get_subgroup(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<Json<SubGroupRepresentation>, ApiError> {
    let subgroup = state.subgroups.retrieve(&principal, id).await?;
    Ok(Json(subgroup.into()))
}

pub async fn update_subgroup(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(payload): ApiJson<SubGroupRequest>,
) -> Result<Json<SubGroupRepresentation>, ApiError> {
    let subgroup = state.subgroups.update(&principal, id, payload.into()).await?;
    Ok(Json(subgroup.into()))
}

pub async fn delete_subgroup(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.subgroups.delete(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
