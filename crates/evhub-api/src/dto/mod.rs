//! Request and response bodies
//!
//! Identifiers are always output-only: an `id` (or `last_modified_by`) in a
//! request body is ignored.

pub mod event;
pub mod group;
pub mod user;
pub mod venue;

pub use event::{EventRepresentation, EventRequest};
pub use group::{GroupRepresentation, GroupRequest, SubGroupRepresentation, SubGroupRequest};
pub use user::{CreateUserRequest, TokenRequest, TokenResponse, UpdateProfileRequest, UserRepresentation};
pub use venue::{VenueDetail, VenueRequest, VenueSummary};

use serde::{Deserialize, Deserializer};

/// Distinguish an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Pair with `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
