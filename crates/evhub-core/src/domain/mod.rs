//! # Event Hub Core - Domain Module
//! 
//! Domain entities for the event hub.

pub mod defaults;
pub mod event;
pub mod group;
pub mod principal;
pub mod subgroup;
pub mod user;
pub mod venue;

// Re-export all entities
pub use defaults::DefaultKind;
pub use event::{Event, EventChanges, NewEvent};
pub use group::{Group, GroupChanges, NewGroup};
pub use principal::Principal;
pub use subgroup::{NewSubGroup, SubGroup, SubGroupChanges};
pub use user::{NewUser, User};
pub use venue::{NewVenue, Venue, VenueChanges, VenueScope};
