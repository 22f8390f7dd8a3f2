//! Shared harness: the full router over the in-memory store

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;

use evhub_api::{build_router, AppState};
use evhub_core::domain::{NewUser, User};
use evhub_core::repositories::Repositories;
use evhub_core::services::CreateUser;
use evhub_infrastructure::in_memory_repositories;
use evhub_security::{JwtService, PasswordService};

pub const PASSWORD: &str = "testpass123";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub repos: Repositories,
}

/// A persisted user plus a bearer token for it.
pub struct Caller {
    pub user: User,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let repos = in_memory_repositories();
        let jwt = Arc::new(JwtService::new("integration-test-secret", 3600));
        let state = AppState::new(repos.clone(), jwt);
        let server = TestServer::new(build_router(state.clone())).unwrap();
        Self { server, state, repos }
    }

    pub async fn regular(&self) -> Caller {
        let email: String = SafeEmail().fake();
        let user = self
            .state
            .users
            .create_user(CreateUser {
                email,
                password: Some(PASSWORD.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        self.caller(user).await
    }

    /// Staff flag only.
    pub async fn staff(&self) -> Caller {
        let email: String = SafeEmail().fake();
        let mut new_user =
            NewUser::new(&email, Some(PasswordService::hash(PASSWORD).unwrap()), None, None)
                .unwrap();
        new_user.is_staff = true;
        let user = self.repos.users.create(&new_user).await.unwrap();
        self.caller(user).await
    }

    /// Staff and superuser.
    pub async fn superuser(&self) -> Caller {
        let email: String = SafeEmail().fake();
        let user = self.state.users.create_superuser(&email, PASSWORD).await.unwrap();
        self.caller(user).await
    }

    async fn caller(&self, user: User) -> Caller {
        let token = self.state.users.issue_token(&user.email, PASSWORD).await.unwrap();
        Caller { user, token }
    }
}
