//! Authenticated caller and its capability predicates

use evhub_shared::EntityId;

/// The authenticated caller of a request.
///
/// Only the capability flags are carried; handlers never need the full user row
/// to make an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: EntityId,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Principal {
    /// Staff or superuser. Grants the unscoped view of venues.
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }

    /// Staff flag alone. Gates the group/subgroup collections and lets the
    /// caller pick a venue's primary contact on creation.
    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    /// Changing an existing venue's primary contact needs both flags.
    pub fn can_reassign_contact(&self) -> bool {
        self.is_staff && self.is_superuser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(is_staff: bool, is_superuser: bool) -> Principal {
        Principal { user_id: 7, is_active: true, is_staff, is_superuser }
    }

    #[test]
    fn test_capabilities_by_role() {
        let regular = principal(false, false);
        assert!(!regular.is_admin());
        assert!(!regular.is_staff());
        assert!(!regular.can_reassign_contact());

        let staff = principal(true, false);
        assert!(staff.is_admin());
        assert!(staff.is_staff());
        assert!(!staff.can_reassign_contact());

        let superuser_only = principal(false, true);
        assert!(superuser_only.is_admin());
        assert!(!superuser_only.is_staff());
        assert!(!superuser_only.can_reassign_contact());

        let full = principal(true, true);
        assert!(full.can_reassign_contact());
    }
}
