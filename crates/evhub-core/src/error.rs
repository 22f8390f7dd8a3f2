//! Domain errors

use evhub_shared::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Authentication credentials were not provided or are invalid")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("User not active")]
    UserNotActive,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        DomainError::NotFound { entity, id }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
