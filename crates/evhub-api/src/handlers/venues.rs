//! /api/venues/

use axum::{extract::State, http::StatusCode, Extension, Json};

use evhub_core::domain::Principal;
use evhub_shared::EntityId;

use crate::dto::{VenueDetail, VenueRequest, VenueSummary};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub async fn list_venues(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<VenueSummary>>, ApiError> {
    let venues = state.venues.list(&principal).await?;
    Ok(Json(venues.into_iter().map(Into::into).collect()))
}

pub async fn create_venue(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiJson(payload): ApiJson<VenueRequest>,
) -> Result<(StatusCode, Json<VenueDetail>), ApiError> {
    let venue = state.venues.create(&principal, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(venue.into())))
}

pub async fn get_venue(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<Json<VenueDetail>, ApiError> {
    let venue = state.venues.retrieve(&principal, id).await?;
    Ok(Json(venue.into()))
}

/// Serves both PUT and PATCH; absent fields are left unchanged.
pub async fn update_venue(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(payload): ApiJson<VenueRequest>,
) -> Result<Json<VenueDetail>, ApiError> {
    let venue = state.venues.update(&principal, id, payload.into()).await?;
    Ok(Json(venue.into()))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.venues.delete(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
