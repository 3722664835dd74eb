//! Email verification with one-time codes.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::services::auth_service::normalize_email;
use crate::domain::entities::NewOtpCode;
use crate::domain::repositories::{OtpRepository, UserRepository};
use crate::error::AppError;
use crate::infrastructure::mail::Mailer;
use crate::utils::code_generator::generate_otp;
use crate::utils::expiry::expires_after;
use crate::utils::token_hash::TokenHasher;

/// Lifetime and attempt budget of verification codes.
#[derive(Debug, Clone, Copy)]
pub struct OtpPolicy {
    pub ttl_seconds: u64,
    pub max_attempts: i32,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            ttl_seconds: 600,
            max_attempts: 3,
        }
    }
}

pub struct OtpService {
    otp_repository: Arc<dyn OtpRepository>,
    user_repository: Arc<dyn UserRepository>,
    mailer: Arc<dyn Mailer>,
    hasher: TokenHasher,
    policy: OtpPolicy,
}

impl OtpService {
    pub fn new(
        otp_repository: Arc<dyn OtpRepository>,
        user_repository: Arc<dyn UserRepository>,
        mailer: Arc<dyn Mailer>,
        hasher: TokenHasher,
        policy: OtpPolicy,
    ) -> Self {
        Self {
            otp_repository,
            user_repository,
            mailer,
            hasher,
            policy,
        }
    }

    /// Issues a code for `email` and hands it to the mailer.
    ///
    /// Unknown addresses succeed silently so the endpoint cannot be used to
    /// enumerate accounts. A new code replaces any earlier one.
    pub async fn request_code(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        if self.user_repository.find_by_email(&email).await?.is_none() {
            debug!(email, "Verification requested for unknown email");
            return Ok(());
        }

        let code = generate_otp();
        let expires_at = expires_after(Utc::now(), self.policy.ttl_seconds)?;

        self.otp_repository
            .replace(NewOtpCode {
                email: email.clone(),
                code_hash: self.digest(&email, &code),
                expires_at,
            })
            .await?;

        self.mailer
            .send_otp(&email, &code, self.policy.ttl_seconds.div_ceil(60))
            .await
            .map_err(|e| {
                AppError::internal(
                    "Failed to deliver verification code",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        info!(email, "Verification code sent");
        Ok(())
    }

    /// Checks `code` for `email` and marks the address verified.
    ///
    /// Every guess, right or wrong, spends one attempt before the code is
    /// compared, so concurrent guesses cannot exceed the budget. Once the
    /// budget is used up the code is discarded and a new one has to be
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing, expired, exhausted or
    /// wrong codes.
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        let Some(otp) = self.otp_repository.find_latest(&email).await? else {
            return Err(AppError::bad_request(
                "Invalid or expired verification code",
                json!({ "reason": "No pending code" }),
            ));
        };

        if otp.is_expired() {
            self.otp_repository.delete_for_email(&email).await?;
            return Err(AppError::bad_request(
                "Invalid or expired verification code",
                json!({ "reason": "Code expired" }),
            ));
        }

        let Some(attempts) = self
            .otp_repository
            .spend_attempt(otp.id, self.policy.max_attempts)
            .await?
        else {
            self.otp_repository.delete_for_email(&email).await?;
            return Err(AppError::bad_request(
                "Too many attempts, request a new code",
                json!({ "max_attempts": self.policy.max_attempts }),
            ));
        };

        if !self.hasher.verify(&format!("{email}:{code}"), &otp.code_hash) {
            let remaining = (self.policy.max_attempts - attempts).max(0);
            if remaining == 0 {
                self.otp_repository.delete_for_email(&email).await?;
            }
            warn!(email, attempts, "Wrong verification code");
            return Err(AppError::bad_request(
                "Invalid verification code",
                json!({ "remaining_attempts": remaining }),
            ));
        }

        self.user_repository.mark_email_verified(&email).await?;
        self.otp_repository.delete_for_email(&email).await?;

        info!(email, "Email verified");
        Ok(())
    }

    fn digest(&self, email: &str, code: &str) -> String {
        self.hasher.hash(&format!("{email}:{code}"))
    }
}
