//! Expiry timestamps for sessions and verification codes.

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;

use crate::error::AppError;

/// Returns `now + ttl_seconds`, or an internal error when the result does
/// not fit a timestamp.
pub fn expires_after(now: DateTime<Utc>, ttl_seconds: u64) -> Result<DateTime<Utc>, AppError> {
    i64::try_from(ttl_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::internal(
                "Expiry out of range",
                json!({ "ttl_seconds": ttl_seconds }),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_adds_seconds() {
        let now = Utc::now();
        assert_eq!(expires_after(now, 600).unwrap(), now + TimeDelta::minutes(10));
    }

    #[test]
    fn test_expires_after_out_of_range_is_error() {
        let now = Utc::now();

        assert!(matches!(
            expires_after(now, 10_000_000_000_000),
            Err(AppError::Internal { .. })
        ));
        assert!(expires_after(now, 10_000_000_000_000_000).is_err());
        assert!(expires_after(now, u64::MAX).is_err());
    }
}
