// ============================================================================
// Event Hub Core - Venue Entity
// File: crates/evhub-core/src/domain/venue.rs
// Description: Location record owned by a primary contact
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use evhub_shared::constants::MAX_NAME_LENGTH;
use evhub_shared::EntityId;

use super::principal::Principal;

/// Venue entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: EntityId,
    pub venue_name: Option<String>,
    pub address: Option<String>,
    pub primary_contact: Option<EntityId>,
}

impl Venue {
    pub fn apply(&mut self, changes: VenueChanges) {
        if let Some(venue_name) = changes.venue_name {
            self.venue_name = venue_name;
        }
        if let Some(address) = changes.address {
            self.address = address;
        }
        if let Some(primary_contact) = changes.primary_contact {
            self.primary_contact = primary_contact;
        }
    }
}

/// Insert payload for a venue row
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct NewVenue {
    #[validate(length(max = MAX_NAME_LENGTH, message = "Venue name too long"))]
    pub venue_name: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH, message = "Address too long"))]
    pub address: Option<String>,

    pub primary_contact: Option<EntityId>,
}

/// Field updates for a venue. The outer `Option` is "field present in the
/// request", the inner one is the nullable column value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueChanges {
    pub venue_name: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub primary_contact: Option<Option<EntityId>>,
}

impl VenueChanges {
    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        NewVenue {
            venue_name: self.venue_name.clone().flatten(),
            address: self.address.clone().flatten(),
            primary_contact: None,
        }
        .validate()
    }
}

/// Which venues a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueScope {
    All,
    ContactedBy(EntityId),
}

impl VenueScope {
    pub fn for_principal(principal: &Principal) -> Self {
        if principal.is_admin() {
            VenueScope::All
        } else {
            VenueScope::ContactedBy(principal.user_id)
        }
    }

    pub fn contains(&self, venue: &Venue) -> bool {
        match self {
            VenueScope::All => true,
            VenueScope::ContactedBy(user_id) => venue.primary_contact == Some(*user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> Venue {
        Venue {
            id: 1,
            venue_name: Some("Smalls".into()),
            address: Some("10339 Conant".into()),
            primary_contact: Some(3),
        }
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut v = venue();
        v.apply(VenueChanges {
            venue_name: Some(Some("Changed".into())),
            ..Default::default()
        });
        assert_eq!(v.venue_name.as_deref(), Some("Changed"));
        assert_eq!(v.address.as_deref(), Some("10339 Conant"));
        assert_eq!(v.primary_contact, Some(3));
    }

    #[test]
    fn test_apply_can_null_a_field() {
        let mut v = venue();
        v.apply(VenueChanges { address: Some(None), ..Default::default() });
        assert_eq!(v.address, None);
    }

    #[test]
    fn test_scope() {
        let owner = Principal { user_id: 3, is_active: true, is_staff: false, is_superuser: false };
        let other = Principal { user_id: 4, ..owner };
        let admin = Principal { user_id: 5, is_staff: true, ..owner };

        assert!(VenueScope::for_principal(&owner).contains(&venue()));
        assert!(!VenueScope::for_principal(&other).contains(&venue()));
        assert_eq!(VenueScope::for_principal(&admin), VenueScope::All);
    }
}
