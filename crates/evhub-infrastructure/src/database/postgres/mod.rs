//! PostgreSQL repository implementations

pub mod default_row_repo_impl;
pub mod event_repo_impl;
pub mod group_repo_impl;
pub mod health_impl;
pub mod subgroup_repo_impl;
pub mod user_repo_impl;
pub mod venue_repo_impl;

pub use default_row_repo_impl::PgDefaultRowRepository;
pub use event_repo_impl::PgEventRepository;
pub use group_repo_impl::PgGroupRepository;
pub use health_impl::PgStoreHealth;
pub use subgroup_repo_impl::PgSubGroupRepository;
pub use user_repo_impl::PgUserRepository;
pub use venue_repo_impl::PgVenueRepository;

use evhub_core::error::DomainError;
use tracing::error;

/// Map a failed insert/update. Constraint violations are caller mistakes
/// (dangling reference, negative duration); anything else is a storage fault.
pub(crate) fn write_error(action: &str, e: sqlx::Error) -> DomainError {
    if let Some(db) = e.as_database_error() {
        if db.is_foreign_key_violation() || db.is_check_violation() {
            return DomainError::ValidationError(format!(
                "{} rejected by constraint {}",
                action,
                db.constraint().unwrap_or("unknown")
            ));
        }
    }
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}
