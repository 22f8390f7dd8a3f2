// ============================================================================
// Event Hub Infrastructure - PostgreSQL Event Repository
// File: crates/evhub-infrastructure/src/database/postgres/event_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use evhub_core::domain::{Event, NewEvent};
use evhub_core::error::DomainError;
use evhub_core::repositories::EventRepository;
use evhub_shared::EntityId;

use super::write_error;

pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    pub id: i64,
    pub title: Option<String>,
    pub duration: i32,
    pub datetime: Option<DateTime<Utc>>,
    pub description: String,
    pub venue_id: i64,
    pub group_id: i64,
    pub subgroup_id: i64,
    pub last_modified_by: Option<i64>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            duration: row.duration,
            datetime: row.datetime,
            description: row.description,
            venue_id: row.venue_id,
            group_id: row.group_id,
            subgroup_id: row.subgroup_id,
            last_modified_by: row.last_modified_by,
        }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT
                id, title, duration, datetime, description,
                venue_id, group_id, subgroup_id, last_modified_by
            FROM events
            ORDER BY id DESC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing events: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Event>, DomainError> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
            SELECT
                id, title, duration, datetime, description,
                venue_id, group_id, subgroup_id, last_modified_by
            FROM events
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding event by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let row: EventRow = sqlx::query_as(
            r#"
            INSERT INTO events (
                title, duration, datetime, description,
                venue_id, group_id, subgroup_id, last_modified_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, title, duration, datetime, description,
                venue_id, group_id, subgroup_id, last_modified_by
            "#
        )
        .bind(&event.title)
        .bind(event.duration)
        .bind(event.datetime)
        .bind(&event.description)
        .bind(event.venue_id)
        .bind(event.group_id)
        .bind(event.subgroup_id)
        .bind(event.last_modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating event", e))?;

        info!("Event row created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, event: &Event) -> Result<Event, DomainError> {
        let row: EventRow = sqlx::query_as(
            r#"
            UPDATE events
            SET
                title = $2,
                duration = $3,
                datetime = $4,
                description = $5,
                venue_id = $6,
                group_id = $7,
                subgroup_id = $8,
                last_modified_by = $9
            WHERE id = $1
            RETURNING
                id, title, duration, datetime, description,
                venue_id, group_id, subgroup_id, last_modified_by
            "#
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(event.duration)
        .bind(event.datetime)
        .bind(&event.description)
        .bind(event.venue_id)
        .bind(event.group_id)
        .bind(event.subgroup_id)
        .bind(event.last_modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating event", e))?
        .ok_or_else(|| DomainError::not_found("Event", event.id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting event: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
