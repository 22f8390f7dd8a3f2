//! Common types

/// Primary key type shared by every table (`BIGSERIAL`).
pub type EntityId = i64;
