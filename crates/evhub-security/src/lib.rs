//! # Event Hub Security
//! 
//! Security utilities: JWT bearer tokens and password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
