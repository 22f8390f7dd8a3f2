// ============================================================================
// Event Hub Core - User Service
// File: crates/evhub-core/src/services/user_service.rs
// ============================================================================
//! User accounts, token issuance and bearer-token authentication

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use evhub_security::{JwtError, JwtService, PasswordService};
use evhub_shared::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use evhub_shared::utils::{mask_email, normalize_email};
use evhub_shared::EntityId;

use crate::domain::{NewUser, Principal, User};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Input for account creation
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub email: String,
    pub password: Option<String>,
    pub name: Option<String>,
    pub user_org: Option<String>,
}

/// Fields a user may change on their own account
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub user_org: Option<String>,
    pub password: Option<String>,
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt: Arc<JwtService>) -> Self {
        Self { user_repo, jwt }
    }

    /// Create a regular user
    pub async fn create_user(&self, input: CreateUser) -> Result<User, DomainError> {
        let user = self.build_user(input)?;
        self.insert(user).await
    }

    /// Create a user with both the staff and superuser flags
    pub async fn create_superuser(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .build_user(CreateUser {
                email: email.to_string(),
                password: Some(password.to_string()),
                ..Default::default()
            })?
            .into_superuser();
        self.insert(user).await
    }

    /// Exchange credentials for a bearer token
    pub async fn issue_token(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let email = normalize_email(email);
        info!("Token request for email: {}", mask_email(&email));

        let user = self.user_repo.find_by_email(&email).await?.ok_or_else(|| {
            warn!("Token refused: unknown email {}", mask_email(&email));
            DomainError::InvalidCredentials
        })?;

        if !user.is_active {
            warn!("Token refused: user {} is not active", user.id);
            return Err(DomainError::UserNotActive);
        }

        let stored_hash = user.password.as_ref().ok_or(DomainError::InvalidCredentials)?;
        let password_valid = PasswordService::verify(password, stored_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;
        if !password_valid {
            warn!("Token refused: invalid password for user {}", user.id);
            return Err(DomainError::InvalidCredentials);
        }

        self.jwt
            .generate_access_token(user.id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))
    }

    /// Resolve a bearer token to the calling principal
    pub async fn authenticate(&self, token: &str) -> Result<Principal, DomainError> {
        let claims = self.jwt.validate_token(token).map_err(|e| {
            match &e {
                JwtError::TokenExpired => warn!("Rejected expired token"),
                _ => warn!("Rejected token: {}", e),
            }
            DomainError::Unauthenticated
        })?;
        let user_id = claims.user_id().map_err(|_| DomainError::Unauthenticated)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        if !user.is_active {
            warn!("Rejected token of inactive user {}", user.id);
            return Err(DomainError::Unauthenticated);
        }

        Ok(user.principal())
    }

    pub async fn get(&self, user_id: EntityId) -> Result<User, DomainError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))
    }

    pub async fn update_profile(
        &self,
        user_id: EntityId,
        changes: ProfileChanges,
    ) -> Result<User, DomainError> {
        let mut user = self.get(user_id).await?;

        if let Some(name) = changes.name {
            user.name = name.trim().to_string();
        }
        if let Some(user_org) = changes.user_org {
            user.user_org = user_org.trim().to_string();
        }
        if let Some(password) = changes.password {
            user.password = Some(hash_password(&password)?);
        }
        user.modified_at = Some(Utc::now());

        let updated = self.user_repo.update(&user).await?;
        info!("User {} updated their profile", user_id);
        Ok(updated)
    }

    fn build_user(&self, input: CreateUser) -> Result<NewUser, DomainError> {
        let password_hash = input.password.as_deref().map(hash_password).transpose()?;
        NewUser::new(&input.email, password_hash, input.name, input.user_org)
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(&user.email));
            return Err(DomainError::EmailAlreadyExists(user.email));
        }

        let created = self.user_repo.create(&user).await?;
        info!(
            "User {} created (staff: {}, superuser: {})",
            created.id, created.is_staff, created.is_superuser
        );
        Ok(created)
    }
}

fn hash_password(password: &str) -> Result<String, DomainError> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    PasswordService::hash(password).map_err(|e| DomainError::PasswordHashError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use mockall::predicate::eq;

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("test-secret", 300))
    }

    fn stored(user: &NewUser, id: EntityId) -> User {
        User {
            id,
            email: user.email.clone(),
            name: user.name.clone(),
            password: user.password.clone(),
            is_active: true,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            user_org: user.user_org.clone(),
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_user_normalizes_and_hashes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "Test2@example.com")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|u| u.email == "Test2@example.com" && !u.is_staff && !u.is_superuser)
            .returning(|u| Ok(stored(u, 1)));

        let service = UserService::new(Arc::new(repo), jwt());
        let user = service
            .create_user(CreateUser {
                email: "Test2@Example.com".into(),
                password: Some("testpass123".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(user.email, "Test2@example.com");
        let hash = user.password.unwrap();
        assert!(PasswordService::verify("testpass123", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_create_user_without_email_persists_nothing() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();
        repo.expect_find_by_email().never();

        let service = UserService::new(Arc::new(repo), jwt());
        let result = service
            .create_user(CreateUser {
                email: String::new(),
                password: Some("test123".into()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_superuser_sets_flags() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|u| u.is_staff && u.is_superuser)
            .returning(|u| Ok(stored(u, 1)));

        let service = UserService::new(Arc::new(repo), jwt());
        let user = service.create_superuser("test@example.com", "test123").await.unwrap();
        assert!(user.is_staff);
        assert!(user.is_superuser);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let email: String = SafeEmail().fake();
        let existing = stored(&NewUser::new(&email, None, None, None).unwrap(), 3);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let service = UserService::new(Arc::new(repo), jwt());
        let result = service
            .create_user(CreateUser { email, password: Some("secret1".into()), ..Default::default() })
            .await;
        assert!(matches!(result, Err(DomainError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(repo), jwt());
        let result = service
            .create_user(CreateUser {
                email: "a@example.com".into(),
                password: Some("123".into()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_token_round_trip_authenticates() {
        let hash = PasswordService::hash("password123").unwrap();
        let user = stored(
            &NewUser::new("user@example.com", Some(hash), None, None).unwrap(),
            11,
        );
        let by_id = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(move |_| Ok(Some(user.clone())));
        repo.expect_find_by_id()
            .with(eq(11))
            .returning(move |_| Ok(Some(by_id.clone())));

        let service = UserService::new(Arc::new(repo), jwt());
        assert!(matches!(
            service.issue_token("user@example.com", "wrong-password").await,
            Err(DomainError::InvalidCredentials)
        ));

        let token = service.issue_token("user@EXAMPLE.com", "password123").await.unwrap();
        let principal = service.authenticate(&token).await.unwrap();
        assert_eq!(principal.user_id, 11);
        assert!(!principal.is_admin());
    }

    #[tokio::test]
    async fn test_authenticate_rejects_inactive_user() {
        let mut user = stored(&NewUser::new("gone@example.com", None, None, None).unwrap(), 4);
        user.is_active = false;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(user.clone())));

        let jwt = jwt();
        let token = jwt.generate_access_token(4).unwrap();
        let service = UserService::new(Arc::new(repo), jwt);
        assert!(matches!(
            service.authenticate(&token).await,
            Err(DomainError::Unauthenticated)
        ));
        assert!(matches!(
            service.authenticate("garbage").await,
            Err(DomainError::Unauthenticated)
        ));
    }
}
