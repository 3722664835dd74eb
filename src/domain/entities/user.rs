//! User entity: the identity that owns links.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password_hash` is an Argon2id PHC string and never leaves the service layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_verification_flag() {
        let mut user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            email_verified_at: None,
            created_at: Utc::now(),
        };

        assert!(!user.is_email_verified());

        user.email_verified_at = Some(Utc::now());
        assert!(user.is_email_verified());
    }
}
