// ============================================================================
// Event Hub Infrastructure - PostgreSQL User Repository
// File: crates/evhub-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use evhub_core::domain::{NewUser, User};
use evhub_core::error::DomainError;
use evhub_core::repositories::UserRepository;
use evhub_shared::EntityId;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub user_org: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            password: row.password,
            is_active: row.is_active,
            is_staff: row.is_staff,
            is_superuser: row.is_superuser,
            user_org: row.user_org,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

fn is_email_conflict(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation() && db.constraint() == Some("users_email_key"))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT
                id, email, name, password,
                is_active, is_staff, is_superuser, user_org,
                created_at, modified_at
            FROM users
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT
                id, email, name, password,
                is_active, is_staff, is_superuser, user_org,
                created_at, modified_at
            FROM users
            WHERE email = $1
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by email: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (
                email, name, password,
                is_staff, is_superuser, user_org
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, email, name, password,
                is_active, is_staff, is_superuser, user_org,
                created_at, modified_at
            "#
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(&user.user_org)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            if is_email_conflict(&e) {
                return DomainError::EmailAlreadyExists(user.email.clone());
            }
            error!("Database error creating user: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("User row created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            UPDATE users
            SET
                name = $2,
                password = $3,
                is_active = $4,
                is_staff = $5,
                is_superuser = $6,
                user_org = $7,
                modified_at = $8
            WHERE id = $1
            RETURNING
                id, email, name, password,
                is_active, is_staff, is_superuser, user_org,
                created_at, modified_at
            "#
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.password)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(&user.user_org)
        .bind(user.modified_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating user: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| DomainError::not_found("User", user.id))?;

        Ok(row.into())
    }
}
