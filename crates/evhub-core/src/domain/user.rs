// ============================================================================
// Event Hub Core - User Entity
// File: crates/evhub-core/src/domain/user.rs
// Description: Authentication principal record
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use evhub_shared::constants::MAX_NAME_LENGTH;
use evhub_shared::utils::normalize_email;
use evhub_shared::EntityId;

use super::principal::Principal;
use crate::error::DomainError;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    /// Argon2 PHC string; `None` means the account has no usable password.
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub user_org: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.id,
            is_active: self.is_active,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
        }
    }
}

/// Insert payload for a user row
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 255, message = "User must have an email address"))]
    pub email: String,

    #[validate(length(max = MAX_NAME_LENGTH, message = "Name too long"))]
    pub name: String,

    pub password: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,

    #[validate(length(max = MAX_NAME_LENGTH, message = "Organisation too long"))]
    pub user_org: String,
}

impl NewUser {
    /// Build a regular user; the email is normalized and must not be empty.
    pub fn new(
        email: &str,
        password_hash: Option<String>,
        name: Option<String>,
        user_org: Option<String>,
    ) -> Result<Self, DomainError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::ValidationError(
                "User must have an email address".to_string(),
            ));
        }

        let user = Self {
            email,
            name: name.map(|n| n.trim().to_string()).unwrap_or_default(),
            password: password_hash,
            is_staff: false,
            is_superuser: false,
            user_org: user_org.map(|o| o.trim().to_string()).unwrap_or_default(),
        };

        user.validate()?;
        Ok(user)
    }

    pub fn into_superuser(mut self) -> Self {
        self.is_staff = true;
        self.is_superuser = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email() {
        let user = NewUser::new("Test2@Example.com", None, None, None).unwrap();
        assert_eq!(user.email, "Test2@example.com");
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
    }

    #[test]
    fn test_new_user_without_email_fails() {
        assert!(matches!(
            NewUser::new("", Some("hash".into()), None, None),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            NewUser::new("   ", None, None, None),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_into_superuser_sets_both_flags() {
        let user = NewUser::new("root@example.com", None, None, None)
            .unwrap()
            .into_superuser();
        assert!(user.is_staff);
        assert!(user.is_superuser);
    }

    #[test]
    fn test_name_length_is_validated() {
        let long = "x".repeat(300);
        assert!(NewUser::new("a@b.c", None, Some(long), None).is_err());
    }
}
