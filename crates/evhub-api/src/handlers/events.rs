//! /api/events/

use axum::{extract::State, http::StatusCode, Extension, Json};

use evhub_core::domain::Principal;
use evhub_shared::EntityId;

use crate::dto::{EventRepresentation, EventRequest};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub async fn list_events(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<EventRepresentation>>, ApiError> {
    let events = state.events.list(&principal).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

pub async fn create_event(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiJson(payload): ApiJson<EventRequest>,
) -> Result<(StatusCode, Json<EventRepresentation>), ApiError> {
    let event = state.events.create(&principal, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

pub async fn get_event(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<Json<EventRepresentation>, ApiError> {
    let event = state.events.retrieve(&principal, id).await?;
    Ok(Json(event.into()))
}

pub async fn update_event(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(payload): ApiJson<EventRequest>,
) -> Result<Json<EventRepresentation>, ApiError> {
    let event = state.events.update(&principal, id, payload.into()).await?;
    Ok(Json(event.into()))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.events.delete(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
