// ============================================================================
// Event Hub Infrastructure - In-Memory Store
// File: crates/evhub-infrastructure/src/database/memory/mod.rs
// ============================================================================
//! Process-local adapter for every repository port
//!
//! Mirrors the PostgreSQL schema: increasing ids per table, newest-first
//! listings, unique emails, foreign-key checks on write, CASCADE from
//! venue/group/subgroup to events and from group to subgroups. A single write
//! lock serializes mutations, which also makes default-row resolution
//! idempotent.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use evhub_core::domain::{
    DefaultKind, Event, Group, NewEvent, NewGroup, NewSubGroup, NewUser, NewVenue, SubGroup, User,
    Venue, VenueScope,
};
use evhub_core::error::DomainError;
use evhub_core::repositories::{
    DefaultRowRepository, EventRepository, GroupRepository, StoreHealth, SubGroupRepository,
    UserRepository, VenueRepository,
};
use evhub_shared::EntityId;

/// One table: rows keyed by id plus the id sequence.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<EntityId, T>,
    last_id: EntityId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: BTreeMap::new(), last_id: 0 }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> EntityId {
        self.last_id += 1;
        self.last_id
    }

    fn newest_first(&self) -> Vec<T> {
        self.rows.values().rev().cloned().collect()
    }

    fn get(&self, id: EntityId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }
}

#[derive(Debug, Default)]
struct State {
    users: Table<User>,
    venues: Table<Venue>,
    groups: Table<Group>,
    subgroups: Table<SubGroup>,
    events: Table<Event>,
}

enum Sentinel {
    EmptyTable,
    Found(EntityId),
    Missing,
}

fn constraint(name: &str) -> DomainError {
    DomainError::ValidationError(format!("rejected by constraint {}", name))
}

impl State {
    fn check_user(&self, user_id: Option<EntityId>, name: &str) -> Result<(), DomainError> {
        match user_id {
            Some(id) if !self.users.contains(id) => Err(constraint(name)),
            _ => Ok(()),
        }
    }

    fn check_event(&self, e: &NewEvent) -> Result<(), DomainError> {
        if e.duration < 0 {
            return Err(constraint("events_duration_check"));
        }
        if !self.venues.contains(e.venue_id) {
            return Err(constraint("events_venue_id_fkey"));
        }
        if !self.groups.contains(e.group_id) {
            return Err(constraint("events_group_id_fkey"));
        }
        if !self.subgroups.contains(e.subgroup_id) {
            return Err(constraint("events_subgroup_id_fkey"));
        }
        self.check_user(e.last_modified_by, "events_last_modified_by_fkey")
    }

    fn insert_group(&mut self, group: &NewGroup) -> Group {
        let id = self.groups.next_id();
        let row = Group {
            id,
            group_name: group.group_name.clone(),
            primary_contact: group.primary_contact,
            is_active: group.is_active,
        };
        self.groups.rows.insert(id, row.clone());
        row
    }

    fn insert_subgroup(&mut self, subgroup: &NewSubGroup) -> SubGroup {
        let id = self.subgroups.next_id();
        let row = SubGroup { id, group_id: subgroup.group_id, display_name: subgroup.display_name.clone() };
        self.subgroups.rows.insert(id, row.clone());
        row
    }

    fn insert_venue(&mut self, venue: &NewVenue) -> Venue {
        let id = self.venues.next_id();
        let row = Venue {
            id,
            venue_name: venue.venue_name.clone(),
            address: venue.address.clone(),
            primary_contact: venue.primary_contact,
        };
        self.venues.rows.insert(id, row.clone());
        row
    }

    /// Lowest id carrying the sentinel name.
    fn find_sentinel(&self, kind: DefaultKind) -> Sentinel {
        let sentinel = Some(kind.sentinel());
        let (empty, found) = match kind {
            DefaultKind::Venue => (
                self.venues.rows.is_empty(),
                self.venues.rows.values().find(|v| v.venue_name.as_deref() == sentinel).map(|v| v.id),
            ),
            DefaultKind::Group => (
                self.groups.rows.is_empty(),
                self.groups.rows.values().find(|g| Some(g.group_name.as_str()) == sentinel).map(|g| g.id),
            ),
            DefaultKind::SubGroup => (
                self.subgroups.rows.is_empty(),
                self.subgroups.rows.values().find(|s| s.display_name.as_deref() == sentinel).map(|s| s.id),
            ),
        };
        match (empty, found) {
            (true, _) => Sentinel::EmptyTable,
            (false, Some(id)) => Sentinel::Found(id),
            (false, None) => Sentinel::Missing,
        }
    }

    fn resolve_default(&mut self, kind: DefaultKind) -> Option<EntityId> {
        match self.find_sentinel(kind) {
            Sentinel::EmptyTable => None,
            Sentinel::Found(id) => Some(id),
            Sentinel::Missing => {
                let id = match kind {
                    DefaultKind::Venue => {
                        self.insert_venue(&NewVenue {
                            venue_name: Some(kind.sentinel().to_string()),
                            ..Default::default()
                        })
                        .id
                    }
                    DefaultKind::Group => self.insert_group(&NewGroup::new(None, None)).id,
                    DefaultKind::SubGroup => {
                        let group_id = self.resolve_default(DefaultKind::Group)?;
                        self.insert_subgroup(&NewSubGroup {
                            group_id,
                            display_name: Some(kind.sentinel().to_string()),
                        })
                        .id
                    }
                };
                info!("Created {} row {}", kind.sentinel(), id);
                Some(id)
            }
        }
    }

    fn delete_events_where(&mut self, pred: impl Fn(&Event) -> bool) {
        self.events.rows.retain(|_, e| !pred(e));
    }
}

/// In-memory adapter; wrap in an `Arc` and hand it out as every port.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        Ok(self.state.read().await.users.get(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.rows.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut state = self.state.write().await;
        if state.users.rows.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }

        let id = state.users.next_id();
        let row = User {
            id,
            email: user.email.clone(),
            name: user.name.clone(),
            password: user.password.clone(),
            is_active: true,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            user_org: user.user_org.clone(),
            created_at: Utc::now(),
            modified_at: None,
        };
        state.users.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut state = self.state.write().await;
        let row = state
            .users
            .rows
            .get_mut(&user.id)
            .ok_or_else(|| DomainError::not_found("User", user.id))?;

        // Email and creation time are fixed at insert.
        row.name = user.name.clone();
        row.password = user.password.clone();
        row.is_active = user.is_active;
        row.is_staff = user.is_staff;
        row.is_superuser = user.is_superuser;
        row.user_org = user.user_org.clone();
        row.modified_at = user.modified_at;
        Ok(row.clone())
    }
}

#[async_trait]
impl VenueRepository for MemoryStore {
    async fn list(&self, scope: VenueScope) -> Result<Vec<Venue>, DomainError> {
        let state = self.state.read().await;
        Ok(state.venues.newest_first().into_iter().filter(|v| scope.contains(v)).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Venue>, DomainError> {
        Ok(self.state.read().await.venues.get(id))
    }

    async fn create(&self, venue: &NewVenue) -> Result<Venue, DomainError> {
        let mut state = self.state.write().await;
        state.check_user(venue.primary_contact, "venues_primary_contact_fkey")?;
        Ok(state.insert_venue(venue))
    }

    async fn update(&self, venue: &Venue) -> Result<Venue, DomainError> {
        let mut state = self.state.write().await;
        if !state.venues.contains(venue.id) {
            return Err(DomainError::not_found("Venue", venue.id));
        }
        state.check_user(venue.primary_contact, "venues_primary_contact_fkey")?;
        state.venues.rows.insert(venue.id, venue.clone());
        Ok(venue.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        if state.venues.rows.remove(&id).is_none() {
            return Ok(false);
        }
        state.delete_events_where(|e| e.venue_id == id);
        Ok(true)
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Group>, DomainError> {
        Ok(self.state.read().await.groups.newest_first())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Group>, DomainError> {
        Ok(self.state.read().await.groups.get(id))
    }

    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError> {
        let mut state = self.state.write().await;
        state.check_user(group.primary_contact, "groups_primary_contact_fkey")?;
        Ok(state.insert_group(group))
    }

    async fn update(&self, group: &Group) -> Result<Group, DomainError> {
        let mut state = self.state.write().await;
        if !state.groups.contains(group.id) {
            return Err(DomainError::not_found("Group", group.id));
        }
        state.check_user(group.primary_contact, "groups_primary_contact_fkey")?;
        state.groups.rows.insert(group.id, group.clone());
        Ok(group.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        if state.groups.rows.remove(&id).is_none() {
            return Ok(false);
        }

        let orphaned: Vec<EntityId> = state
            .subgroups
            .rows
            .values()
            .filter(|s| s.group_id == id)
            .map(|s| s.id)
            .collect();
        state.subgroups.rows.retain(|_, s| s.group_id != id);
        state.delete_events_where(|e| e.group_id == id || orphaned.contains(&e.subgroup_id));
        Ok(true)
    }
}

#[async_trait]
impl SubGroupRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<SubGroup>, DomainError> {
        Ok(self.state.read().await.subgroups.newest_first())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<SubGroup>, DomainError> {
        Ok(self.state.read().await.subgroups.get(id))
    }

    async fn create(&self, subgroup: &NewSubGroup) -> Result<SubGroup, DomainError> {
        let mut state = self.state.write().await;
        if !state.groups.contains(subgroup.group_id) {
            return Err(constraint("subgroups_group_id_fkey"));
        }
        Ok(state.insert_subgroup(subgroup))
    }

    async fn update(&self, subgroup: &SubGroup) -> Result<SubGroup, DomainError> {
        let mut state = self.state.write().await;
        if !state.subgroups.contains(subgroup.id) {
            return Err(DomainError::not_found("SubGroup", subgroup.id));
        }
        if !state.groups.contains(subgroup.group_id) {
            return Err(constraint("subgroups_group_id_fkey"));
        }
        state.subgroups.rows.insert(subgroup.id, subgroup.clone());
        Ok(subgroup.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        if state.subgroups.rows.remove(&id).is_none() {
            return Ok(false);
        }
        state.delete_events_where(|e| e.subgroup_id == id);
        Ok(true)
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.state.read().await.events.newest_first())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Event>, DomainError> {
        Ok(self.state.read().await.events.get(id))
    }

    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let mut state = self.state.write().await;
        state.check_event(event)?;

        let id = state.events.next_id();
        let row = Event {
            id,
            title: event.title.clone(),
            duration: event.duration,
            datetime: event.datetime,
            description: event.description.clone(),
            venue_id: event.venue_id,
            group_id: event.group_id,
            subgroup_id: event.subgroup_id,
            last_modified_by: event.last_modified_by,
        };
        state.events.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, event: &Event) -> Result<Event, DomainError> {
        let mut state = self.state.write().await;
        if !state.events.contains(event.id) {
            return Err(DomainError::not_found("Event", event.id));
        }
        state.check_event(&NewEvent::from(event))?;
        state.events.rows.insert(event.id, event.clone());
        Ok(event.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        Ok(self.state.write().await.events.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl DefaultRowRepository for MemoryStore {
    async fn resolve_or_create_default(
        &self,
        kind: DefaultKind,
    ) -> Result<Option<EntityId>, DomainError> {
        Ok(self.state.write().await.resolve_default(kind))
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
