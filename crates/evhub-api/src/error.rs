//! HTTP error type and the domain-to-status mapping

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use evhub_core::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "Unauthorized", msg)
            }
            ApiError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, "Forbidden", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DatabaseError",
                    "A storage error occurred".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::Unauthenticated => ApiError::Unauthorized(err.to_string()),
            DomainError::Forbidden(msg) => ApiError::Forbidden(msg),
            DomainError::UserNotActive | DomainError::InvalidCredentials => ApiError::BadRequest(
                "Unable to authenticate with provided credentials".to_string(),
            ),
            DomainError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("User with this email already exists".to_string())
            }
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::InternalError(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_statuses() {
        let cases = [
            (DomainError::not_found("Venue", 1), StatusCode::NOT_FOUND),
            (DomainError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (DomainError::ValidationError("bad".into()), StatusCode::BAD_REQUEST),
            (DomainError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (DomainError::EmailAlreadyExists("a@b.c".into()), StatusCode::BAD_REQUEST),
            (DomainError::DatabaseError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain, expected) in cases {
            let response = ApiError::from(domain).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
