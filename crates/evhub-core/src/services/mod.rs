//! Domain services (business logic)

pub mod event_service;
pub mod group_service;
pub mod subgroup_service;
pub mod user_service;
pub mod venue_service;

pub use event_service::{EventInput, EventService};
pub use group_service::GroupService;
pub use subgroup_service::{SubGroupInput, SubGroupService};
pub use user_service::{CreateUser, ProfileChanges, UserService};
pub use venue_service::VenueService;

use crate::domain::Principal;
use crate::error::DomainError;
use crate::repositories::UserRepository;
use evhub_shared::EntityId;

/// Gate shared by the admin-only collections (groups, subgroups).
pub(crate) fn require_staff(principal: &Principal, resource: &str) -> Result<(), DomainError> {
    if principal.is_staff() {
        Ok(())
    } else {
        tracing::warn!("User {} denied access to {}", principal.user_id, resource);
        Err(DomainError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        ))
    }
}

/// A referenced user must exist.
pub(crate) async fn ensure_user_exists(
    users: &dyn UserRepository,
    user_id: Option<EntityId>,
) -> Result<(), DomainError> {
    if let Some(id) = user_id {
        if users.find_by_id(id).await?.is_none() {
            return Err(DomainError::ValidationError(format!(
                "Invalid pk \"{}\" - user does not exist",
                id
            )));
        }
    }
    Ok(())
}
