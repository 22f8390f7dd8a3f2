use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Ready once the store answers.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state
        .health
        .ping()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;
    Ok(StatusCode::OK)
}
