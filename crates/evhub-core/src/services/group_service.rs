// ============================================================================
// Event Hub Core - Group Service
// File: crates/evhub-core/src/services/group_service.rs
// ============================================================================
//! Group CRUD, restricted to staff users

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use evhub_shared::EntityId;

use super::{ensure_user_exists, require_staff};
use crate::domain::{Group, GroupChanges, NewGroup, Principal};
use crate::error::DomainError;
use crate::repositories::{GroupRepository, UserRepository};

pub struct GroupService {
    group_repo: Arc<dyn GroupRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl GroupService {
    pub fn new(group_repo: Arc<dyn GroupRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { group_repo, user_repo }
    }

    pub async fn list(&self, principal: &Principal) -> Result<Vec<Group>, DomainError> {
        require_staff(principal, "groups")?;
        self.group_repo.list().await
    }

    pub async fn retrieve(&self, principal: &Principal, id: EntityId) -> Result<Group, DomainError> {
        require_staff(principal, "groups")?;
        self.find(id).await
    }

    pub async fn create(&self, principal: &Principal, group: NewGroup) -> Result<Group, DomainError> {
        require_staff(principal, "groups")?;
        group.validate()?;
        ensure_user_exists(self.user_repo.as_ref(), group.primary_contact).await?;

        let created = self.group_repo.create(&group).await?;
        info!("Group {} ({}) created by user {}", created.id, created.group_name, principal.user_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: EntityId,
        changes: GroupChanges,
    ) -> Result<Group, DomainError> {
        require_staff(principal, "groups")?;
        let mut group = self.find(id).await?;

        changes.validate()?;
        if let Some(contact) = changes.primary_contact {
            ensure_user_exists(self.user_repo.as_ref(), contact).await?;
        }

        group.apply(changes);
        let updated = self.group_repo.update(&group).await?;
        info!("Group {} updated by user {}", id, principal.user_id);
        Ok(updated)
    }

    /// Removes the group together with its subgroups and events.
    pub async fn delete(&self, principal: &Principal, id: EntityId) -> Result<(), DomainError> {
        require_staff(principal, "groups")?;
        if !self.group_repo.delete(id).await? {
            return Err(DomainError::not_found("Group", id));
        }
        info!("Group {} deleted by user {}", id, principal.user_id);
        Ok(())
    }

    async fn find(&self, id: EntityId) -> Result<Group, DomainError> {
        self.group_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Group", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockGroupRepository, MockUserRepository};

    fn principal(is_staff: bool) -> Principal {
        Principal { user_id: 1, is_active: true, is_staff, is_superuser: is_staff }
    }

    #[tokio::test]
    async fn test_non_staff_is_forbidden_everywhere() {
        let mut groups = MockGroupRepository::new();
        groups.expect_list().never();
        groups.expect_find_by_id().never();
        groups.expect_create().never();
        groups.expect_update().never();
        groups.expect_delete().never();

        let service = GroupService::new(Arc::new(groups), Arc::new(MockUserRepository::new()));
        let user = principal(false);

        assert!(matches!(service.list(&user).await, Err(DomainError::Forbidden(_))));
        assert!(matches!(service.retrieve(&user, 1).await, Err(DomainError::Forbidden(_))));
        assert!(matches!(
            service.create(&user, NewGroup::new(Some("New Group".into()), None)).await,
            Err(DomainError::Forbidden(_))
        ));
        assert!(matches!(
            service.update(&user, 1, GroupChanges::default()).await,
            Err(DomainError::Forbidden(_))
        ));
        assert!(matches!(service.delete(&user, 1).await, Err(DomainError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_staff_creates_group_without_contact() {
        let mut groups = MockGroupRepository::new();
        groups
            .expect_create()
            .withf(|g| g.group_name == "New Group" && g.primary_contact.is_none() && g.is_active)
            .returning(|g| {
                Ok(Group {
                    id: 1,
                    group_name: g.group_name.clone(),
                    primary_contact: g.primary_contact,
                    is_active: g.is_active,
                })
            });

        let service = GroupService::new(Arc::new(groups), Arc::new(MockUserRepository::new()));
        let created = service
            .create(&principal(true), NewGroup::new(Some("New Group".into()), None))
            .await
            .unwrap();
        assert_eq!(created.group_name, "New Group");
    }

    #[tokio::test]
    async fn test_delete_missing_group_is_not_found() {
        let mut groups = MockGroupRepository::new();
        groups.expect_delete().returning(|_| Ok(false));

        let service = GroupService::new(Arc::new(groups), Arc::new(MockUserRepository::new()));
        assert!(matches!(
            service.delete(&principal(true), 99).await,
            Err(DomainError::NotFound { entity: "Group", id: 99 })
        ));
    }
}
