//! Router harness backed by repository mocks.

use axum_test::TestServer;
use chrono::Utc;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, OtpPolicy, OtpService, ShortenPolicy};
use crate::domain::entities::{Link, User};
use crate::domain::repositories::{
    MockLinkRepository, MockOtpRepository, MockSessionRepository, MockUserRepository,
};
use crate::infrastructure::mail::MockMailer;
use crate::routes::router;
use crate::state::AppState;
use crate::utils::token_hash::TokenHasher;

pub const TEST_SECRET: &str = "handler-test-secret";
pub const TEST_TOKEN: &str = "handler-test-token";
pub const BASE_URL: &str = "https://sho.rt";
pub const SESSION_TTL: u64 = 3600;

pub struct Mocks {
    pub links: MockLinkRepository,
    pub users: MockUserRepository,
    pub sessions: MockSessionRepository,
    pub otps: MockOtpRepository,
    pub mailer: MockMailer,
}

impl Mocks {
    pub fn new() -> Self {
        Self {
            links: MockLinkRepository::new(),
            users: MockUserRepository::new(),
            sessions: MockSessionRepository::new(),
            otps: MockOtpRepository::new(),
            mailer: MockMailer::new(),
        }
    }

    /// Makes [`TEST_TOKEN`] resolve to `user`.
    pub fn authenticate_as(&mut self, user: User) {
        let expected = TokenHasher::new(TEST_SECRET).hash(TEST_TOKEN);
        self.sessions
            .expect_find_user_by_token_hash()
            .withf(move |hash| hash == expected)
            .returning(move |_| Ok(Some(user.clone())));
    }

    pub fn into_state(self) -> AppState {
        let link_service = LinkService::new(
            Arc::new(self.links),
            ShortenPolicy::default(),
            BASE_URL.to_string(),
        );
        let users: Arc<MockUserRepository> = Arc::new(self.users);
        let auth_service = AuthService::new(
            users.clone(),
            Arc::new(self.sessions),
            TokenHasher::new(TEST_SECRET),
            SESSION_TTL,
        );
        let otp_service = OtpService::new(
            Arc::new(self.otps),
            users,
            Arc::new(self.mailer),
            TokenHasher::new(TEST_SECRET),
            OtpPolicy::default(),
        );

        AppState::new(
            Arc::new(link_service),
            Arc::new(auth_service),
            Arc::new(otp_service),
            false,
        )
    }

    pub fn server(self) -> TestServer {
        TestServer::new(router(self.into_state())).unwrap()
    }
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

pub fn test_user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$stub".to_string(),
        email_verified_at: None,
        created_at: Utc::now(),
    }
}

pub fn test_link(id: i64, code: &str, destination: &str, owner: Option<i64>) -> Link {
    Link::new(
        id,
        code.to_string(),
        destination.to_string(),
        0,
        owner,
        Utc::now(),
    )
}
