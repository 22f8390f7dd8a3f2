// ============================================================================
// Event Hub Core - Venue Service
// File: crates/evhub-core/src/services/venue_service.rs
// ============================================================================
//! Venue CRUD with primary-contact ownership rules
//!
//! Admins (staff or superuser) see every venue. Everyone else sees, and can
//! reach by id, only the venues they are primary contact of. Venues outside
//! the caller's scope are reported as not found.

use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use evhub_shared::EntityId;

use super::ensure_user_exists;
use crate::domain::{NewVenue, Principal, Venue, VenueChanges, VenueScope};
use crate::error::DomainError;
use crate::repositories::{UserRepository, VenueRepository};

pub struct VenueService {
    venue_repo: Arc<dyn VenueRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl VenueService {
    pub fn new(venue_repo: Arc<dyn VenueRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { venue_repo, user_repo }
    }

    pub async fn list(&self, principal: &Principal) -> Result<Vec<Venue>, DomainError> {
        let scope = VenueScope::for_principal(principal);
        let venues = self.venue_repo.list(scope).await?;
        debug!("User {} listed {} venues ({:?})", principal.user_id, venues.len(), scope);
        Ok(venues)
    }

    pub async fn retrieve(&self, principal: &Principal, id: EntityId) -> Result<Venue, DomainError> {
        let venue = self
            .venue_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Venue", id))?;

        if !VenueScope::for_principal(principal).contains(&venue) {
            warn!("User {} requested venue {} outside their scope", principal.user_id, id);
            return Err(DomainError::not_found("Venue", id));
        }
        Ok(venue)
    }

    /// Non-staff callers always become the venue's primary contact.
    pub async fn create(&self, principal: &Principal, mut venue: NewVenue) -> Result<Venue, DomainError> {
        if !principal.is_staff() {
            if venue.primary_contact.is_some_and(|c| c != principal.user_id) {
                debug!("Overriding primary contact supplied by user {}", principal.user_id);
            }
            venue.primary_contact = Some(principal.user_id);
        }

        venue.validate()?;
        ensure_user_exists(self.user_repo.as_ref(), venue.primary_contact).await?;

        let created = self.venue_repo.create(&venue).await?;
        info!("Venue {} created by user {}", created.id, principal.user_id);
        Ok(created)
    }

    /// Primary-contact changes from callers lacking both admin flags are
    /// dropped, the rest of the update still applies. The supplied contact
    /// must still name an existing user.
    pub async fn update(
        &self,
        principal: &Principal,
        id: EntityId,
        mut changes: VenueChanges,
    ) -> Result<Venue, DomainError> {
        let mut venue = self.retrieve(principal, id).await?;

        changes.validate()?;
        if let Some(contact) = changes.primary_contact {
            ensure_user_exists(self.user_repo.as_ref(), contact).await?;
        }

        if !principal.can_reassign_contact() && changes.primary_contact.take().is_some() {
            debug!("Dropped primary contact change on venue {} by user {}", id, principal.user_id);
        }

        venue.apply(changes);
        let updated = self.venue_repo.update(&venue).await?;
        info!("Venue {} updated by user {}", id, principal.user_id);
        Ok(updated)
    }

    pub async fn delete(&self, principal: &Principal, id: EntityId) -> Result<(), DomainError> {
        self.retrieve(principal, id).await?;

        if !self.venue_repo.delete(id).await? {
            return Err(DomainError::not_found("Venue", id));
        }
        info!("Venue {} deleted by user {}", id, principal.user_id);
        Ok(())
    }
}
