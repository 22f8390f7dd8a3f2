//! Venue bodies

use serde::{Deserialize, Serialize};

use evhub_core::domain::{NewVenue, Venue, VenueChanges};
use evhub_shared::EntityId;

use super::double_option;

/// List representation; the contact is only shown on single-venue responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: EntityId,
    pub venue_name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VenueDetail {
    pub id: EntityId,
    pub venue_name: Option<String>,
    pub address: Option<String>,
    pub primary_contact: Option<EntityId>,
}

impl From<Venue> for VenueSummary {
    fn from(venue: Venue) -> Self {
        Self { id: venue.id, venue_name: venue.venue_name, address: venue.address }
    }
}

impl From<Venue> for VenueDetail {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            venue_name: venue.venue_name,
            address: venue.address,
            primary_contact: venue.primary_contact,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VenueRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub venue_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub primary_contact: Option<Option<EntityId>>,
}

impl From<VenueRequest> for NewVenue {
    fn from(req: VenueRequest) -> Self {
        Self {
            venue_name: req.venue_name.flatten(),
            address: req.address.flatten(),
            primary_contact: req.primary_contact.flatten(),
        }
    }
}

impl From<VenueRequest> for VenueChanges {
    fn from(req: VenueRequest) -> Self {
        Self {
            venue_name: req.venue_name,
            address: req.address,
            primary_contact: req.primary_contact,
        }
    }
}
