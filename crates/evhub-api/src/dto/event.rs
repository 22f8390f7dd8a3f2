//! Event bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use evhub_core::domain::{Event, EventChanges};
use evhub_core::services::EventInput;
use evhub_shared::EntityId;

use super::double_option;

#[derive(Debug, Serialize, Deserialize)]
pub struct EventRepresentation {
    pub id: EntityId,
    pub title: Option<String>,
    pub duration: i32,
    pub datetime: Option<DateTime<Utc>>,
    pub description: String,
    pub venue_id: EntityId,
    pub group_id: EntityId,
    pub subgroup_id: EntityId,
    pub last_modified_by: Option<EntityId>,
}

impl From<Event> for EventRepresentation {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            duration: event.duration,
            datetime: event.datetime,
            description: event.description,
            venue_id: event.venue_id,
            group_id: event.group_id,
            subgroup_id: event.subgroup_id,
            last_modified_by: event.last_modified_by,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EventRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub datetime: Option<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub venue_id: Option<EntityId>,
    #[serde(default)]
    pub group_id: Option<EntityId>,
    #[serde(default)]
    pub subgroup_id: Option<EntityId>,
}

impl From<EventRequest> for EventInput {
    fn from(req: EventRequest) -> Self {
        Self {
            title: req.title.flatten(),
            duration: req.duration,
            datetime: req.datetime.flatten(),
            description: req.description,
            venue_id: req.venue_id,
            group_id: req.group_id,
            subgroup_id: req.subgroup_id,
        }
    }
}

impl From<EventRequest> for EventChanges {
    fn from(req: EventRequest) -> Self {
        Self {
            title: req.title,
            duration: req.duration,
            datetime: req.datetime,
            description: req.description,
            venue_id: req.venue_id,
            group_id: req.group_id,
            subgroup_id: req.subgroup_id,
        }
    }
}
