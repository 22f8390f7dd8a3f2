//! SubGroup entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use evhub_shared::constants::MAX_NAME_LENGTH;
use evhub_shared::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubGroup {
    pub id: EntityId,
    pub group_id: EntityId,
    pub display_name: Option<String>,
}

impl SubGroup {
    pub fn apply(&mut self, changes: SubGroupChanges) {
        if let Some(group_id) = changes.group_id {
            self.group_id = group_id;
        }
        if let Some(display_name) = changes.display_name {
            self.display_name = display_name;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewSubGroup {
    pub group_id: EntityId,

    #[validate(length(max = MAX_NAME_LENGTH, message = "Display name too long"))]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubGroupChanges {
    pub group_id: Option<EntityId>,
    pub display_name: Option<Option<String>>,
}
