//! Account registration, login and session authentication.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{NewSession, NewUser, User};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_session_token;
use crate::utils::expiry::expires_after;
use crate::utils::password;
use crate::utils::token_hash::TokenHasher;

/// Unique constraints guarding `users`.
const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// A freshly opened session. `token` is shown to the client once.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for accounts and their single active session.
///
/// Session tokens are hashed with HMAC-SHA256 before storage. Sessions are
/// keyed by user, so each login invalidates the previous one.
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    session_repository: Arc<dyn SessionRepository>,
    hasher: TokenHasher,
    session_ttl_seconds: u64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `hasher` - keyed hasher; must use the secret tokens were issued with
    /// - `session_ttl_seconds` - lifetime of a session
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        session_repository: Arc<dyn SessionRepository>,
        hasher: TokenHasher,
        session_ttl_seconds: u64,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            hasher,
            session_ttl_seconds,
        }
    }

    /// Lifetime of newly issued sessions in seconds.
    pub fn session_ttl_seconds(&self) -> u64 {
        self.session_ttl_seconds
    }

    /// Registers an account and logs it in.
    ///
    /// Input shape is validated at the HTTP boundary; the email is stored
    /// trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    pub async fn signup(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<IssuedSession, AppError> {
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&password))
            .await
            .map_err(|e| AppError::internal("Password hashing task failed", json!({ "reason": e.to_string() })))?
            .map_err(|e| AppError::internal("Failed to hash password", json!({ "reason": e.to_string() })))?;

        let new_user = NewUser {
            username,
            email: normalize_email(&email),
            password_hash,
        };

        let user = self
            .user_repository
            .create(new_user)
            .await
            .map_err(|e| match e.conflict_constraint() {
                Some(USERNAME_CONSTRAINT) => {
                    AppError::conflict("Username is already taken", json!({ "field": "username" }))
                }
                Some(EMAIL_CONSTRAINT) => {
                    AppError::conflict("Email is already registered", json!({ "field": "email" }))
                }
                _ => e,
            })?;

        info!(user_id = user.id, username = %user.username, "User registered");

        self.open_session(user).await
    }

    /// Verifies credentials and opens a new session.
    ///
    /// Any session the user had before is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the same message for unknown
    /// users and wrong passwords.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AppError> {
        let invalid = || {
            AppError::unauthorized(
                "Invalid username or password",
                json!({ "reason": "Credentials rejected" }),
            )
        };

        let Some(user) = self.user_repository.find_by_username(username).await? else {
            warn!(username, "Login attempt for unknown user");
            return Err(invalid());
        };

        let candidate = password.to_string();
        let stored = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || password::verify_password(&candidate, &stored))
            .await
            .map_err(|e| AppError::internal("Password verification task failed", json!({ "reason": e.to_string() })))?
            .map_err(|e| AppError::internal("Stored password hash is invalid", json!({ "reason": e.to_string() })))?;

        if !matches {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(invalid());
        }

        metrics::counter!("logins_total").increment(1);

        self.open_session(user).await
    }

    /// Resolves a raw session token to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown, expired or
    /// was superseded by a newer login.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = self.hasher.hash(token);

        self.session_repository
            .find_user_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid, expired or replaced session" }),
                )
            })
    }

    /// Ends the user's session.
    pub async fn logout(&self, user_id: i64) -> Result<(), AppError> {
        if self.session_repository.delete_for_user(user_id).await? {
            info!(user_id, "User logged out");
        }
        Ok(())
    }

    async fn open_session(&self, user: User) -> Result<IssuedSession, AppError> {
        let token = generate_session_token();
        let expires_at = expires_after(Utc::now(), self.session_ttl_seconds)?;

        let (_, replaced) = self
            .session_repository
            .replace_for_user(NewSession {
                user_id: user.id,
                token_hash: self.hasher.hash(&token),
                expires_at,
            })
            .await?;

        if replaced {
            info!(user_id = user.id, "Previous session terminated by new login");
        }
        info!(user_id = user.id, "Session opened");

        Ok(IssuedSession {
            user,
            token,
            expires_at,
        })
    }
}

/// Canonical form of an email address for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
