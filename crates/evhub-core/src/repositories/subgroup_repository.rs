//! SubGroup repository trait (port)

use async_trait::async_trait;
use evhub_shared::EntityId;

use crate::domain::{NewSubGroup, SubGroup};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubGroupRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<SubGroup>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<SubGroup>, DomainError>;
    async fn create(&self, subgroup: &NewSubGroup) -> Result<SubGroup, DomainError>;
    async fn update(&self, subgroup: &SubGroup) -> Result<SubGroup, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
