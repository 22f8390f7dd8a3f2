//! Venue repository trait (port)

use async_trait::async_trait;
use evhub_shared::EntityId;

use crate::domain::{NewVenue, Venue, VenueScope};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Venues inside `scope`, newest first.
    async fn list(&self, scope: VenueScope) -> Result<Vec<Venue>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Venue>, DomainError>;
    async fn create(&self, venue: &NewVenue) -> Result<Venue, DomainError>;
    async fn update(&self, venue: &Venue) -> Result<Venue, DomainError>;
    /// Returns `false` when no row matched. Dependent events are removed with it.
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
