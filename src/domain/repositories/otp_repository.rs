//! Repository trait for email verification codes.

use crate::domain::entities::{NewOtpCode, OtpCode};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Stores a fresh code, dropping previous codes for the same email.
    async fn replace(&self, new_code: NewOtpCode) -> Result<OtpCode, AppError>;

    /// Latest code issued for `email`.
    async fn find_latest(&self, email: &str) -> Result<Option<OtpCode>, AppError>;

    /// Spends one attempt on an unexpired code and returns the new count.
    ///
    /// Returns `None` when the code is gone, expired, or already has
    /// `max_attempts` attempts. The check and the increment are one step.
    async fn spend_attempt(&self, id: i64, max_attempts: i32) -> Result<Option<i32>, AppError>;

    async fn delete_for_email(&self, email: &str) -> Result<(), AppError>;
}
