//! Event repository trait (port)

use async_trait::async_trait;
use evhub_shared::EntityId;

use crate::domain::{Event, NewEvent};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Event>, DomainError>;
    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError>;
    async fn update(&self, event: &Event) -> Result<Event, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
