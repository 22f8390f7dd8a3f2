//! Default-row resolution port

use async_trait::async_trait;
use evhub_shared::EntityId;

use crate::domain::DefaultKind;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefaultRowRepository: Send + Sync {
    /// Id of the sentinel row for `kind`, creating it on first use.
    ///
    /// Returns `None` while the table is empty. Must be idempotent under
    /// concurrent callers: exactly one sentinel row per table.
    async fn resolve_or_create_default(
        &self,
        kind: DefaultKind,
    ) -> Result<Option<EntityId>, DomainError>;
}
