//! User and token bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use evhub_core::domain::User;
use evhub_core::services::{CreateUser, ProfileChanges};

/// Public view of an account; the password is write-only.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRepresentation {
    pub email: String,
    pub name: String,
    pub user_org: String,
}

impl From<User> for UserRepresentation {
    fn from(user: User) -> Self {
        Self { email: user.email, name: user.name, user_org: user.user_org }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_org: Option<String>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self { email: req.email, password: req.password, name: req.name, user_org: req.user_org }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_org: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        Self { name: req.name, user_org: req.user_org, password: req.password }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_validated() {
        let ok = CreateUserRequest {
            email: "Test2@Example.com".into(),
            password: Some("testpass123".into()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let no_email = CreateUserRequest { password: Some("testpass123".into()), ..Default::default() };
        assert!(no_email.validate().is_err());

        let no_password = CreateUserRequest { email: "a@example.com".into(), ..Default::default() };
        assert!(no_password.validate().is_err());
    }
}
