//! User repository trait (port)

use async_trait::async_trait;
use evhub_shared::EntityId;

use crate::domain::{NewUser, User};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError>;
    /// Exact lookup; callers pass an already normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    /// Fails with `EmailAlreadyExists` when the email is taken.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
    async fn update(&self, user: &User) -> Result<User, DomainError>;
}
