// ============================================================================
// Event Hub Core - SubGroup Service
// File: crates/evhub-core/src/services/subgroup_service.rs
// ============================================================================
//! SubGroup CRUD, restricted to staff users

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use evhub_shared::EntityId;

use super::require_staff;
use crate::domain::{DefaultKind, NewSubGroup, Principal, SubGroup, SubGroupChanges};
use crate::error::DomainError;
use crate::repositories::{DefaultRowRepository, GroupRepository, SubGroupRepository};

#[derive(Debug, Clone, Default)]
pub struct SubGroupInput {
    /// Falls back to the default group when omitted.
    pub group_id: Option<EntityId>,
    pub display_name: Option<String>,
}

pub struct SubGroupService {
    subgroup_repo: Arc<dyn SubGroupRepository>,
    group_repo: Arc<dyn GroupRepository>,
    defaults: Arc<dyn DefaultRowRepository>,
}

impl SubGroupService {
    pub fn new(
        subgroup_repo: Arc<dyn SubGroupRepository>,
        group_repo: Arc<dyn GroupRepository>,
        defaults: Arc<dyn DefaultRowRepository>,
    ) -> Self {
        Self { subgroup_repo, group_repo, defaults }
    }

    pub async fn list(&self, principal: &Principal) -> Result<Vec<SubGroup>, DomainError> {
        require_staff(principal, "subgroups")?;
        self.subgroup_repo.list().await
    }

    pub async fn retrieve(&self, principal: &Principal, id: EntityId) -> Result<SubGroup, DomainError> {
        require_staff(principal, "subgroups")?;
        self.find(id).await
    }

    pub async fn create(&self, principal: &Principal, input: SubGroupInput) -> Result<SubGroup, DomainError> {
        require_staff(principal, "subgroups")?;

        let group_id = match input.group_id {
            Some(id) => {
                self.ensure_group_exists(id).await?;
                id
            }
            None => self
                .defaults
                .resolve_or_create_default(DefaultKind::Group)
                .await?
                .ok_or_else(|| DomainError::ValidationError("group_id: This field is required.".to_string()))?,
        };

        let subgroup = NewSubGroup { group_id, display_name: input.display_name };
        subgroup.validate()?;

        let created = self.subgroup_repo.create(&subgroup).await?;
        info!("SubGroup {} created in group {} by user {}", created.id, group_id, principal.user_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: EntityId,
        changes: SubGroupChanges,
    ) -> Result<SubGroup, DomainError> {
        require_staff(principal, "subgroups")?;
        let mut subgroup = self.find(id).await?;

        if let Some(group_id) = changes.group_id {
            self.ensure_group_exists(group_id).await?;
        }
        subgroup.apply(changes);
        NewSubGroup { group_id: subgroup.group_id, display_name: subgroup.display_name.clone() }.validate()?;

        let updated = self.subgroup_repo.update(&subgroup).await?;
        info!("SubGroup {} updated by user {}", id, principal.user_id);
        Ok(updated)
    }

    pub async fn delete(&self, principal: &Principal, id: EntityId) -> Result<(), DomainError> {
        require_staff(principal, "subgroups")?;
        if !self.subgroup_repo.delete(id).await? {
            return Err(DomainError::not_found("SubGroup", id));
        }
        info!("SubGroup {} deleted by user {}", id, principal.user_id);
        Ok(())
    }

    async fn find(&self, id: EntityId) -> Result<SubGroup, DomainError> {
        self.subgroup_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("SubGroup", id))
    }

    async fn ensure_group_exists(&self, id: EntityId) -> Result<(), DomainError> {
        match self.group_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::ValidationError(format!(
                "Invalid pk \"{}\" - group does not exist",
                id
            ))),
        }
    }
}
