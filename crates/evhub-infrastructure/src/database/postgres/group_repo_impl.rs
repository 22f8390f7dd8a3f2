// ============================================================================
// Event Hub Infrastructure - PostgreSQL Group Repository
// File: crates/evhub-infrastructure/src/database/postgres/group_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use evhub_core::domain::{Group, NewGroup};
use evhub_core::error::DomainError;
use evhub_core::repositories::GroupRepository;
use evhub_shared::EntityId;

use super::write_error;

pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRow {
    pub id: i64,
    pub group_name: String,
    pub primary_contact: Option<i64>,
    pub is_active: bool,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            group_name: row.group_name,
            primary_contact: row.primary_contact,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn list(&self) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, group_name, primary_contact, is_active
            FROM groups
            ORDER BY id DESC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing groups: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, group_name, primary_contact, is_active
            FROM groups
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding group by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError> {
        let row: GroupRow = sqlx::query_as(
            r#"
            INSERT INTO groups (group_name, primary_contact, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, group_name, primary_contact, is_active
            "#
        )
        .bind(&group.group_name)
        .bind(group.primary_contact)
        .bind(group.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating group", e))?;

        info!("Group row created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, group: &Group) -> Result<Group, DomainError> {
        let row: GroupRow = sqlx::query_as(
            r#"
            UPDATE groups
            SET group_name = $2, primary_contact = $3, is_active = $4
            WHERE id = $1
            RETURNING id, group_name, primary_contact, is_active
            "#
        )
        .bind(group.id)
        .bind(&group.group_name)
        .bind(group.primary_contact)
        .bind(group.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating group", e))?
        .ok_or_else(|| DomainError::not_found("Group", group.id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting group: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
