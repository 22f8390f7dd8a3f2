// ============================================================================
// Event Hub Infrastructure - PostgreSQL Default Row Resolution
// File: crates/evhub-infrastructure/src/database/postgres/default_row_repo_impl.rs
// ============================================================================
//! Lazily created "default venue" / "default group" / "default subgroup" rows
//!
//! Each resolution runs in its own transaction under a per-table advisory
//! lock, so concurrent callers agree on a single sentinel row. A subgroup
//! resolution takes the `subgroups` lock first and then the `groups` lock;
//! group resolution never takes the `subgroups` lock, so the order is fixed.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{error, info};

use evhub_core::domain::DefaultKind;
use evhub_core::error::DomainError;
use evhub_core::repositories::DefaultRowRepository;
use evhub_shared::EntityId;

pub struct PgDefaultRowRepository {
    pool: PgPool,
}

impl PgDefaultRowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

enum Lookup {
    EmptyTable,
    Found(i64),
    Missing,
}

async fn lock_and_find(conn: &mut PgConnection, kind: DefaultKind) -> Result<Lookup, sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(kind.table())
        .execute(&mut *conn)
        .await?;

    // Table and column names come from DefaultKind, never from input.
    let any_row = format!("SELECT id FROM {} LIMIT 1", kind.table());
    let first: Option<i64> = sqlx::query_scalar(&any_row)
        .fetch_optional(&mut *conn)
        .await?;
    if first.is_none() {
        return Ok(Lookup::EmptyTable);
    }

    let sentinel_row = format!(
        "SELECT id FROM {} WHERE {} = $1 ORDER BY id ASC LIMIT 1",
        kind.table(),
        kind.name_column()
    );
    let existing: Option<i64> = sqlx::query_scalar(&sentinel_row)
        .bind(kind.sentinel())
        .fetch_optional(&mut *conn)
        .await?;

    Ok(match existing {
        Some(id) => Lookup::Found(id),
        None => Lookup::Missing,
    })
}

async fn insert_venue(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO venues (venue_name) VALUES ($1) RETURNING id")
        .bind(DefaultKind::Venue.sentinel())
        .fetch_one(&mut *conn)
        .await
}

async fn insert_group(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO groups (group_name, is_active) VALUES ($1, TRUE) RETURNING id")
        .bind(DefaultKind::Group.sentinel())
        .fetch_one(&mut *conn)
        .await
}

async fn insert_subgroup(conn: &mut PgConnection, group_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO subgroups (group_id, display_name) VALUES ($1, $2) RETURNING id")
        .bind(group_id)
        .bind(DefaultKind::SubGroup.sentinel())
        .fetch_one(&mut *conn)
        .await
}

async fn resolve(conn: &mut PgConnection, kind: DefaultKind) -> Result<Option<i64>, sqlx::Error> {
    match lock_and_find(conn, kind).await? {
        Lookup::EmptyTable => Ok(None),
        Lookup::Found(id) => Ok(Some(id)),
        Lookup::Missing => {
            let id = match kind {
                DefaultKind::Venue => insert_venue(conn).await?,
                DefaultKind::Group => insert_group(conn).await?,
                DefaultKind::SubGroup => {
                    let group_id = match lock_and_find(conn, DefaultKind::Group).await? {
                        Lookup::Found(id) => id,
                        Lookup::Missing => insert_group(conn).await?,
                        // Subgroups exist, so their groups do.
                        Lookup::EmptyTable => return Ok(None),
                    };
                    insert_subgroup(conn, group_id).await?
                }
            };
            info!("Created {} row {}", kind.sentinel(), id);
            Ok(Some(id))
        }
    }
}

#[async_trait]
impl DefaultRowRepository for PgDefaultRowRepository {
    async fn resolve_or_create_default(
        &self,
        kind: DefaultKind,
    ) -> Result<Option<EntityId>, DomainError> {
        let map_err = |e: sqlx::Error| {
            error!("Database error resolving {}: {}", kind.sentinel(), e);
            DomainError::DatabaseError(e.to_string())
        };

        let mut tx = self.pool.begin().await.map_err(map_err)?;
        let resolved = resolve(&mut *tx, kind).await.map_err(map_err)?;
        tx.commit().await.map_err(map_err)?;

        Ok(resolved)
    }
}
