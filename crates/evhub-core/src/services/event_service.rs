// ============================================================================
// Event Hub Core - Event Service
// File: crates/evhub-core/src/services/event_service.rs
// ============================================================================
//! Event CRUD with default venue/group/subgroup resolution
//!
//! Events carry no owner: any authenticated user may read or write them, and
//! every write stamps `last_modified_by` with the caller.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use validator::Validate;

use evhub_shared::EntityId;

use crate::domain::{DefaultKind, Event, EventChanges, NewEvent, Principal};
use crate::error::DomainError;
use crate::repositories::{
    DefaultRowRepository, EventRepository, GroupRepository, SubGroupRepository, VenueRepository,
};

/// Input for event creation; missing references resolve to the default rows.
#[derive(Debug, Clone, Default)]
pub struct EventInput {
    pub title: Option<String>,
    pub duration: Option<i32>,
    pub datetime: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub venue_id: Option<EntityId>,
    pub group_id: Option<EntityId>,
    pub subgroup_id: Option<EntityId>,
}

pub struct EventService {
    event_repo: Arc<dyn EventRepository>,
    venue_repo: Arc<dyn VenueRepository>,
    group_repo: Arc<dyn GroupRepository>,
    subgroup_repo: Arc<dyn SubGroupRepository>,
    defaults: Arc<dyn DefaultRowRepository>,
}

impl EventService {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        venue_repo: Arc<dyn VenueRepository>,
        group_repo: Arc<dyn GroupRepository>,
        subgroup_repo: Arc<dyn SubGroupRepository>,
        defaults: Arc<dyn DefaultRowRepository>,
    ) -> Self {
        Self { event_repo, venue_repo, group_repo, subgroup_repo, defaults }
    }

    pub async fn list(&self, _principal: &Principal) -> Result<Vec<Event>, DomainError> {
        self.event_repo.list().await
    }

    pub async fn retrieve(&self, _principal: &Principal, id: EntityId) -> Result<Event, DomainError> {
        self.event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Event", id))
    }

    pub async fn create(&self, principal: &Principal, input: EventInput) -> Result<Event, DomainError> {
        // Group before subgroup: a freshly created default subgroup hangs off the default group.
        let venue_id = self.resolve_reference(DefaultKind::Venue, input.venue_id).await?;
        let group_id = self.resolve_reference(DefaultKind::Group, input.group_id).await?;
        let subgroup_id = self.resolve_reference(DefaultKind::SubGroup, input.subgroup_id).await?;

        let event = NewEvent {
            title: input.title,
            duration: input.duration.unwrap_or(0),
            datetime: input.datetime,
            description: input.description.unwrap_or_default(),
            venue_id,
            group_id,
            subgroup_id,
            last_modified_by: Some(principal.user_id),
        };
        event.validate()?;

        let created = self.event_repo.create(&event).await?;
        info!("Event {} created by user {}", created.id, principal.user_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: EntityId,
        changes: EventChanges,
    ) -> Result<Event, DomainError> {
        let mut event = self.retrieve(principal, id).await?;

        if let Some(venue_id) = changes.venue_id {
            self.ensure_exists(DefaultKind::Venue, venue_id).await?;
        }
        if let Some(group_id) = changes.group_id {
            self.ensure_exists(DefaultKind::Group, group_id).await?;
        }
        if let Some(subgroup_id) = changes.subgroup_id {
            self.ensure_exists(DefaultKind::SubGroup, subgroup_id).await?;
        }

        event.apply(changes);
        event.touch(principal.user_id);
        NewEvent::from(&event).validate()?;

        let updated = self.event_repo.update(&event).await?;
        info!("Event {} updated by user {}", id, principal.user_id);
        Ok(updated)
    }

    pub async fn delete(&self, principal: &Principal, id: EntityId) -> Result<(), DomainError> {
        if !self.event_repo.delete(id).await? {
            return Err(DomainError::not_found("Event", id));
        }
        info!("Event {} deleted by user {}", id, principal.user_id);
        Ok(())
    }

    async fn resolve_reference(
        &self,
        kind: DefaultKind,
        supplied: Option<EntityId>,
    ) -> Result<EntityId, DomainError> {
        if let Some(id) = supplied {
            self.ensure_exists(kind, id).await?;
            return Ok(id);
        }

        let resolved = self.defaults.resolve_or_create_default(kind).await?;
        debug!("Default {} resolved to {:?}", kind.entity(), resolved);
        resolved.ok_or_else(|| {
            DomainError::ValidationError(format!(
                "{}: This field is required and no default {} exists.",
                reference_field(kind),
                kind.entity()
            ))
        })
    }

    async fn ensure_exists(&self, kind: DefaultKind, id: EntityId) -> Result<(), DomainError> {
        let exists = match kind {
            DefaultKind::Venue => self.venue_repo.find_by_id(id).await?.is_some(),
            DefaultKind::Group => self.group_repo.find_by_id(id).await?.is_some(),
            DefaultKind::SubGroup => self.subgroup_repo.find_by_id(id).await?.is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(DomainError::ValidationError(format!(
                "{}: Invalid pk \"{}\" - object does not exist.",
                reference_field(kind),
                id
            )))
        }
    }
}

fn reference_field(kind: DefaultKind) -> &'static str {
    match kind {
        DefaultKind::Venue => "venue_id",
        DefaultKind::Group => "group_id",
        DefaultKind::SubGroup => "subgroup_id",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Group, SubGroup, Venue};
    use crate::repositories::{
        MockDefaultRowRepository, MockEventRepository, MockGroupRepository,
        MockSubGroupRepository, MockVenueRepository,
    };
    use mockall::predicate::eq;

    fn caller() -> Principal {
        Principal { user_id: 5, is_active: true, is_staff: false, is_superuser: false }
    }

    fn stored(id: EntityId, e: &NewEvent) -> Event {
        Event {
            id,
            title: e.title.clone(),
            duration: e.duration,
            datetime: e.datetime,
            description: e.description.clone(),
            venue_id: e.venue_id,
            group_id: e.group_id,
            subgroup_id: e.subgroup_id,
            last_modified_by: e.last_modified_by,
        }
    }

    struct Mocks {
        events: MockEventRepository,
        venues: MockVenueRepository,
        groups: MockGroupRepository,
        subgroups: MockSubGroupRepository,
        defaults: MockDefaultRowRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                events: MockEventRepository::new(),
                venues: MockVenueRepository::new(),
                groups: MockGroupRepository::new(),
                subgroups: MockSubGroupRepository::new(),
                defaults: MockDefaultRowRepository::new(),
            }
        }

        fn service(self) -> EventService {
            EventService::new(
                Arc::new(self.events),
                Arc::new(self.venues),
                Arc::new(self.groups),
                Arc::new(self.subgroups),
                Arc::new(self.defaults),
            )
        }
    }

    #[tokio::test]
    async fn test_create_fills_references_from_defaults() {
        let mut mocks = Mocks::new();
        mocks.defaults
            .expect_resolve_or_create_default()
            .with(eq(DefaultKind::Venue))
            .returning(|_| Ok(Some(1)));
        mocks.defaults
            .expect_resolve_or_create_default()
            .with(eq(DefaultKind::Group))
            .returning(|_| Ok(Some(2)));
        mocks.defaults
            .expect_resolve_or_create_default()
            .with(eq(DefaultKind::SubGroup))
            .returning(|_| Ok(Some(3)));
        mocks.events
            .expect_create()
            .withf(|e| {
                e.venue_id == 1
                    && e.group_id == 2
                    && e.subgroup_id == 3
                    && e.duration == 0
                    && e.last_modified_by == Some(5)
            })
            .returning(|e| Ok(stored(100, e)));

        let event = mocks
            .service()
            .create(&caller(), EventInput { title: Some("Sample event".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(event.id, 100);
        assert_eq!(event.description, "");
    }

    #[tokio::test]
    async fn test_create_uses_supplied_references() {
        let mut mocks = Mocks::new();
        mocks.defaults.expect_resolve_or_create_default().never();
        mocks.venues.expect_find_by_id().returning(|id| {
            Ok(Some(Venue { id, venue_name: None, address: None, primary_contact: None }))
        });
        mocks.groups.expect_find_by_id().returning(|id| {
            Ok(Some(Group { id, group_name: "g".into(), primary_contact: None, is_active: true }))
        });
        mocks.subgroups.expect_find_by_id().returning(|id| {
            Ok(Some(SubGroup { id, group_id: 8, display_name: None }))
        });
        mocks.events.expect_create().returning(|e| Ok(stored(1, e)));

        let event = mocks
            .service()
            .create(
                &caller(),
                EventInput {
                    duration: Some(45),
                    venue_id: Some(7),
                    group_id: Some(8),
                    subgroup_id: Some(9),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!((event.venue_id, event.group_id, event.subgroup_id), (7, 8, 9));
        assert_eq!(event.duration, 45);
    }

    #[tokio::test]
    async fn test_create_without_any_venue_fails() {
        let mut mocks = Mocks::new();
        mocks.defaults.expect_resolve_or_create_default().returning(|_| Ok(None));
        mocks.events.expect_create().never();

        let result = mocks.service().create(&caller(), EventInput::default()).await;
        assert!(matches!(result, Err(DomainError::ValidationError(msg)) if msg.starts_with("venue_id")));
    }

    #[tokio::test]
    async fn test_update_rejects_negative_duration_and_stamps_modifier() {
        let original = Event {
            id: 4,
            title: None,
            duration: 10,
            datetime: None,
            description: String::new(),
            venue_id: 1,
            group_id: 1,
            subgroup_id: 1,
            last_modified_by: Some(1),
        };

        let mut mocks = Mocks::new();
        let found = original.clone();
        mocks.events.expect_find_by_id().returning(move |_| Ok(Some(found.clone())));
        mocks.events
            .expect_update()
            .withf(|e| e.last_modified_by == Some(5) && e.duration == 30)
            .times(1)
            .returning(|e| Ok(e.clone()));
        let service = mocks.service();

        assert!(matches!(
            service
                .update(&caller(), 4, EventChanges { duration: Some(-5), ..Default::default() })
                .await,
            Err(DomainError::ValidationError(_))
        ));

        let updated = service
            .update(&caller(), 4, EventChanges { duration: Some(30), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.last_modified_by, Some(5));
    }
}
