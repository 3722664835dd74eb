//! One-time password entity for email verification.

use chrono::{DateTime, Utc};

/// A pending verification code for an email address.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OtpCode {
    pub id: i64,
    pub email: String,
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
}

impl OtpCode {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NewOtpCode {
    pub email: String,
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
}
