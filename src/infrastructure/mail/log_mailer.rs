//! Mailer that only logs.

use super::service::{MailError, Mailer};
use async_trait::async_trait;
use tracing::{debug, info};

/// Logs verification codes instead of sending them.
///
/// The code itself is only emitted at `DEBUG` level.
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        debug!("Using LogMailer (mail delivery disabled)");
        Self
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_otp(&self, email: &str, code: &str, ttl_minutes: u64) -> Result<(), MailError> {
        info!(email, ttl_minutes, "Verification code issued");
        debug!(email, code, "Verification code content");
        Ok(())
    }
}
