//! Shared handler state

use std::sync::Arc;

use evhub_core::repositories::{Repositories, StoreHealth};
use evhub_core::services::{EventService, GroupService, SubGroupService, UserService, VenueService};
use evhub_security::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub venues: Arc<VenueService>,
    pub groups: Arc<GroupService>,
    pub subgroups: Arc<SubGroupService>,
    pub events: Arc<EventService>,
    pub health: Arc<dyn StoreHealth>,
}

impl AppState {
    pub fn new(repos: Repositories, jwt: Arc<JwtService>) -> Self {
        Self {
            users: Arc::new(UserService::new(repos.users.clone(), jwt)),
            venues: Arc::new(VenueService::new(repos.venues.clone(), repos.users.clone())),
            groups: Arc::new(GroupService::new(repos.groups.clone(), repos.users.clone())),
            subgroups: Arc::new(SubGroupService::new(
                repos.subgroups.clone(),
                repos.groups.clone(),
                repos.defaults.clone(),
            )),
            events: Arc::new(EventService::new(
                repos.events,
                repos.venues,
                repos.groups,
                repos.subgroups,
                repos.defaults,
            )),
            health: repos.health,
        }
    }
}
