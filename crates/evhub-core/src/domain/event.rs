// ============================================================================
// Event Hub Core - Event Entity
// File: crates/evhub-core/src/domain/event.rs
// Description: Scheduled event tied to a venue, group and subgroup
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use evhub_shared::constants::MAX_NAME_LENGTH;
use evhub_shared::EntityId;

/// Event entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub title: Option<String>,
    /// Minutes.
    pub duration: i32,
    pub datetime: Option<DateTime<Utc>>,
    pub description: String,
    pub venue_id: EntityId,
    pub group_id: EntityId,
    pub subgroup_id: EntityId,
    pub last_modified_by: Option<EntityId>,
}

impl Event {
    pub fn apply(&mut self, changes: EventChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(duration) = changes.duration {
            self.duration = duration;
        }
        if let Some(datetime) = changes.datetime {
            self.datetime = datetime;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(venue_id) = changes.venue_id {
            self.venue_id = venue_id;
        }
        if let Some(group_id) = changes.group_id {
            self.group_id = group_id;
        }
        if let Some(subgroup_id) = changes.subgroup_id {
            self.subgroup_id = subgroup_id;
        }
    }

    pub fn touch(&mut self, modified_by: EntityId) {
        self.last_modified_by = Some(modified_by);
    }
}

/// Insert payload for an event row, with every reference already resolved
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewEvent {
    #[validate(length(max = MAX_NAME_LENGTH, message = "Title too long"))]
    pub title: Option<String>,

    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: i32,

    pub datetime: Option<DateTime<Utc>>,
    pub description: String,
    pub venue_id: EntityId,
    pub group_id: EntityId,
    pub subgroup_id: EntityId,
    pub last_modified_by: Option<EntityId>,
}

impl From<&Event> for NewEvent {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            duration: event.duration,
            datetime: event.datetime,
            description: event.description.clone(),
            venue_id: event.venue_id,
            group_id: event.group_id,
            subgroup_id: event.subgroup_id,
            last_modified_by: event.last_modified_by,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventChanges {
    pub title: Option<Option<String>>,
    pub duration: Option<i32>,
    pub datetime: Option<Option<DateTime<Utc>>>,
    pub description: Option<String>,
    pub venue_id: Option<EntityId>,
    pub group_id: Option<EntityId>,
    pub subgroup_id: Option<EntityId>,
}
