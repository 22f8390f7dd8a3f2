// ============================================================================
// Event Hub Core - Group Entity
// File: crates/evhub-core/src/domain/group.rs
// Description: Organizational record owned by a primary contact
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use evhub_shared::constants::MAX_NAME_LENGTH;
use evhub_shared::EntityId;

use super::defaults::DefaultKind;

/// Group entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: EntityId,
    pub group_name: String,
    pub primary_contact: Option<EntityId>,
    /// Stored only; nothing reads it yet.
    pub is_active: bool,
}

impl Group {
    pub fn apply(&mut self, changes: GroupChanges) {
        if let Some(group_name) = changes.group_name {
            self.group_name = group_name;
        }
        if let Some(primary_contact) = changes.primary_contact {
            self.primary_contact = primary_contact;
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
    }
}

/// Insert payload for a group row
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewGroup {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Group name must be between 1 and 255 characters"))]
    pub group_name: String,

    pub primary_contact: Option<EntityId>,
    pub is_active: bool,
}

impl NewGroup {
    pub fn new(group_name: Option<String>, primary_contact: Option<EntityId>) -> Self {
        Self {
            group_name: group_name
                .map(|n| n.trim().to_string())
                .unwrap_or_else(|| DefaultKind::Group.sentinel().to_string()),
            primary_contact,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupChanges {
    pub group_name: Option<String>,
    pub primary_contact: Option<Option<EntityId>>,
    pub is_active: Option<bool>,
}

impl GroupChanges {
    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match &self.group_name {
            Some(name) => NewGroup::new(Some(name.clone()), None).validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_defaults_name() {
        let group = NewGroup::new(None, Some(1));
        assert_eq!(group.group_name, "default group");
        assert!(group.is_active);
    }

    #[test]
    fn test_blank_group_name_is_invalid() {
        assert!(NewGroup::new(Some("   ".into()), None).validate().is_err());
        assert!(GroupChanges { group_name: Some(String::new()), ..Default::default() }
            .validate()
            .is_err());
    }
}
