//! Repository traits (ports)

pub mod default_row_repository;
pub mod event_repository;
pub mod group_repository;
pub mod health;
pub mod subgroup_repository;
pub mod user_repository;
pub mod venue_repository;

pub use default_row_repository::DefaultRowRepository;
pub use event_repository::EventRepository;
pub use group_repository::GroupRepository;
pub use health::StoreHealth;
pub use subgroup_repository::SubGroupRepository;
pub use user_repository::UserRepository;
pub use venue_repository::VenueRepository;

use std::sync::Arc;

/// Every port, backed by one store.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub venues: Arc<dyn VenueRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub subgroups: Arc<dyn SubGroupRepository>,
    pub events: Arc<dyn EventRepository>,
    pub defaults: Arc<dyn DefaultRowRepository>,
    pub health: Arc<dyn StoreHealth>,
}

#[cfg(test)]
pub use default_row_repository::MockDefaultRowRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use subgroup_repository::MockSubGroupRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use venue_repository::MockVenueRepository;
