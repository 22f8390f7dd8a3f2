//! # Event Hub Infrastructure
//! 
//! Storage adapters for the repository ports: PostgreSQL via sqlx and an
//! in-memory store for tests and local runs.

pub mod database;
pub mod error;

use std::sync::Arc;

use sqlx::PgPool;

use evhub_core::repositories::Repositories;

pub use database::{
    create_pool, run_migrations, MemoryStore, PgDefaultRowRepository, PgEventRepository,
    PgGroupRepository, PgStoreHealth, PgSubGroupRepository, PgUserRepository, PgVenueRepository,
};
pub use error::InfraError;

pub fn postgres_repositories(pool: PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        venues: Arc::new(PgVenueRepository::new(pool.clone())),
        groups: Arc::new(PgGroupRepository::new(pool.clone())),
        subgroups: Arc::new(PgSubGroupRepository::new(pool.clone())),
        events: Arc::new(PgEventRepository::new(pool.clone())),
        defaults: Arc::new(PgDefaultRowRepository::new(pool.clone())),
        health: Arc::new(PgStoreHealth::new(pool)),
    }
}

pub fn in_memory_repositories() -> Repositories {
    let store = Arc::new(MemoryStore::new());
    Repositories {
        users: store.clone(),
        venues: store.clone(),
        groups: store.clone(),
        subgroups: store.clone(),
        events: store.clone(),
        defaults: store.clone(),
        health: store,
    }
}
