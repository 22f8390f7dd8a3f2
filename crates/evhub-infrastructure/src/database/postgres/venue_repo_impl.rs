// ============================================================================
// Event Hub Infrastructure - PostgreSQL Venue Repository
// File: crates/evhub-infrastructure/src/database/postgres/venue_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use evhub_core::domain::{NewVenue, Venue, VenueScope};
use evhub_core::error::DomainError;
use evhub_core::repositories::VenueRepository;
use evhub_shared::EntityId;

use super::write_error;

pub struct PgVenueRepository {
    pool: PgPool,
}

impl PgVenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VenueRow {
    pub id: i64,
    pub venue_name: Option<String>,
    pub address: Option<String>,
    pub primary_contact: Option<i64>,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Venue {
            id: row.id,
            venue_name: row.venue_name,
            address: row.address,
            primary_contact: row.primary_contact,
        }
    }
}

#[async_trait]
impl VenueRepository for PgVenueRepository {
    async fn list(&self, scope: VenueScope) -> Result<Vec<Venue>, DomainError> {
        let rows: Vec<VenueRow> = match scope {
            VenueScope::All => {
                sqlx::query_as::<_, VenueRow>(
                    r#"
                    SELECT id, venue_name, address, primary_contact
                    FROM venues
                    ORDER BY id DESC
                    "#
                )
                .fetch_all(&self.pool)
                .await
            }
            VenueScope::ContactedBy(user_id) => {
                sqlx::query_as::<_, VenueRow>(
                    r#"
                    SELECT id, venue_name, address, primary_contact
                    FROM venues
                    WHERE primary_contact = $1
                    ORDER BY id DESC
                    "#
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e: sqlx::Error| {
            error!("Database error listing venues: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Venue>, DomainError> {
        let row: Option<VenueRow> = sqlx::query_as(
            r#"
            SELECT id, venue_name, address, primary_contact
            FROM venues
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding venue by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, venue: &NewVenue) -> Result<Venue, DomainError> {
        let row: VenueRow = sqlx::query_as(
            r#"
            INSERT INTO venues (venue_name, address, primary_contact)
            VALUES ($1, $2, $3)
            RETURNING id, venue_name, address, primary_contact
            "#
        )
        .bind(&venue.venue_name)
        .bind(&venue.address)
        .bind(venue.primary_contact)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating venue", e))?;

        info!("Venue row created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, venue: &Venue) -> Result<Venue, DomainError> {
        let row: VenueRow = sqlx::query_as(
            r#"
            UPDATE venues
            SET venue_name = $2, address = $3, primary_contact = $4
            WHERE id = $1
            RETURNING id, venue_name, address, primary_contact
            "#
        )
        .bind(venue.id)
        .bind(&venue.venue_name)
        .bind(&venue.address)
        .bind(venue.primary_contact)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating venue", e))?
        .ok_or_else(|| DomainError::not_found("Venue", venue.id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting venue: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
