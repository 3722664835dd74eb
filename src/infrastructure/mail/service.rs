//! Mailer trait and error type.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail delivery error: {0}")]
    Delivery(String),
}

/// Sends one-time verification codes to users.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::LogMailer`] - Writes codes to the log
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers `code` to `email`, valid for `ttl_minutes`.
    async fn send_otp(&self, email: &str, code: &str, ttl_minutes: u64) -> Result<(), MailError>;
}
