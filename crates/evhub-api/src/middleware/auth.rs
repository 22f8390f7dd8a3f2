//! Bearer-token authentication
//!
//! Resolves `Authorization: Bearer <jwt>` to a `Principal` and stores it in
//! the request extensions for handlers to pick up with `Extension<Principal>`.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use evhub_shared::constants::BEARER_PREFIX;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::Unauthorized("Authentication credentials were not provided".to_string())
        })?;

    let principal = state.users.authenticate(token).await?;
    debug!("Authenticated user {}", principal.user_id);

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}
