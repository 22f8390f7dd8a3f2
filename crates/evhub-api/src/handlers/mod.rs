//! HTTP handlers

pub mod events;
pub mod groups;
pub mod health;
pub mod subgroups;
pub mod users;
pub mod venues;
