//! Application-wide constants

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const BEARER_PREFIX: &str = "Bearer ";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 86400;
pub const MIN_PASSWORD_LENGTH: usize = 5;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_NAME_LENGTH: u64 = 255;
pub const MEMORY_DATABASE_URL: &str = "memory://";
