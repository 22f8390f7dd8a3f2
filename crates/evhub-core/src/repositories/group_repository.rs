//! Group repository trait (port)

use async_trait::async_trait;
use evhub_shared::EntityId;

use crate::domain::{Group, NewGroup};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// All groups, newest first.
    async fn list(&self) -> Result<Vec<Group>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Group>, DomainError>;
    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError>;
    async fn update(&self, group: &Group) -> Result<Group, DomainError>;
    /// Cascades to subgroups and events of the group.
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
