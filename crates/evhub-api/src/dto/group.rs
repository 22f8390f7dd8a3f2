//! Group and subgroup bodies

use serde::{Deserialize, Serialize};

use evhub_core::domain::{Group, GroupChanges, NewGroup, SubGroup, SubGroupChanges};
use evhub_core::services::SubGroupInput;
use evhub_shared::EntityId;

use super::double_option;

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupRepresentation {
    pub id: EntityId,
    pub group_name: String,
    pub primary_contact: Option<EntityId>,
}

impl From<Group> for GroupRepresentation {
    fn from(group: Group) -> Self {
        Self { id: group.id, group_name: group.group_name, primary_contact: group.primary_contact }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GroupRequest {
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub primary_contact: Option<Option<EntityId>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<GroupRequest> for NewGroup {
    fn from(req: GroupRequest) -> Self {
        let mut group = NewGroup::new(req.group_name, req.primary_contact.flatten());
        if let Some(is_active) = req.is_active {
            group.is_active = is_active;
        }
        group
    }
}

impl From<GroupRequest> for GroupChanges {
    fn from(req: GroupRequest) -> Self {
        Self {
            group_name: req.group_name.map(|n| n.trim().to_string()),
            primary_contact: req.primary_contact,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubGroupRepresentation {
    pub id: EntityId,
    pub group_id: EntityId,
    pub display_name: Option<String>,
}

impl From<SubGroup> for SubGroupRepresentation {
    fn from(subgroup: SubGroup) -> Self {
        Self { id: subgroup.id, group_id: subgroup.group_id, display_name: subgroup.display_name }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SubGroupRequest {
    #[serde(default)]
    pub group_id: Option<EntityId>,
    #[serde(default, deserialize_with = "double_option")]
    pub display_name: Option<Option<String>>,
}

impl From<SubGroupRequest> for SubGroupInput {
    fn from(req: SubGroupRequest) -> Self {
        Self { group_id: req.group_id, display_name: req.display_name.flatten() }
    }
}

impl From<SubGroupRequest> for SubGroupChanges {
    fn from(req: SubGroupRequest) -> Self {
        Self { group_id: req.group_id, display_name: req.display_name }
    }
}
