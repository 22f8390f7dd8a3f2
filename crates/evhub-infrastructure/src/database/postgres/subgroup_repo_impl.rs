// ============================================================================
// Event Hub Infrastructure - PostgreSQL SubGroup Repository
// File: crates/evhub-infrastructure/src/database/postgres/subgroup_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use evhub_core::domain::{NewSubGroup, SubGroup};
use evhub_core::error::DomainError;
use evhub_core::repositories::SubGroupRepository;
use evhub_shared::EntityId;

use super::write_error;

pub struct PgSubGroupRepository {
    pool: PgPool,
}

impl PgSubGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubGroupRow {
    pub id: i64,
    pub group_id: i64,
    pub display_name: Option<String>,
}

impl From<SubGroupRow> for SubGroup {
    fn from(row: SubGroupRow) -> Self {
        SubGroup {
            id: row.id,
            group_id: row.group_id,
            display_name: row.display_name,
        }
    }
}

#[async_trait]
impl SubGroupRepository for PgSubGroupRepository {
    async fn list(&self) -> Result<Vec<SubGroup>, DomainError> {
        let rows: Vec<SubGroupRow> = sqlx::query_as(
            "SELECT id, group_id, display_name FROM subgroups ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing subgroups: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<SubGroup>, DomainError> {
        let row: Option<SubGroupRow> = sqlx::query_as(
            "SELECT id, group_id, display_name FROM subgroups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding subgroup by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, subgroup: &NewSubGroup) -> Result<SubGroup, DomainError> {
        let row: SubGroupRow = sqlx::query_as(
            r#"
            INSERT INTO subgroups (group_id, display_name)
            VALUES ($1, $2)
            RETURNING id, group_id, display_name
            "#
        )
        .bind(subgroup.group_id)
        .bind(&subgroup.display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating subgroup", e))?;

        info!("SubGroup row created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, subgroup: &SubGroup) -> Result<SubGroup, DomainError> {
        let row: SubGroupRow = sqlx::query_as(
            r#"
            UPDATE subgroups
            SET group_id = $2, display_name = $3
            WHERE id = $1
            RETURNING id, group_id, display_name
            "#
        )
        .bind(subgroup.id)
        .bind(subgroup.group_id)
        .bind(&subgroup.display_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating subgroup", e))?
        .ok_or_else(|| DomainError::not_found("SubGroup", subgroup.id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM subgroups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting subgroup: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
