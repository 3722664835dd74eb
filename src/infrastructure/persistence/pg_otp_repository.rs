//! PostgreSQL implementation of OTP repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewOtpCode, OtpCode};
use crate::domain::repositories::OtpRepository;
use crate::error::AppError;

pub struct PgOtpRepository {
    pool: Arc<PgPool>,
}

impl PgOtpRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtpRepository for PgOtpRepository {
    async fn replace(&self, new_code: NewOtpCode) -> Result<OtpCode, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM otp_codes WHERE email = $1 OR expires_at <= NOW()")
            .bind(&new_code.email)
            .execute(&mut *tx)
            .await?;

        let code = sqlx::query_as::<_, OtpCode>(
            r#"
            INSERT INTO otp_codes (email, code_hash, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, email, code_hash, expires_at, attempts, created_at
            "#,
        )
        .bind(&new_code.email)
        .bind(&new_code.code_hash)
        .bind(new_code.expires_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(code)
    }

    async fn find_latest(&self, email: &str) -> Result<Option<OtpCode>, AppError> {
        let code = sqlx::query_as::<_, OtpCode>(
            r#"
            SELECT id, email, code_hash, expires_at, attempts, created_at
            FROM otp_codes
            WHERE email = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(code)
    }

    async fn spend_attempt(&self, id: i64, max_attempts: i32) -> Result<Option<i32>, AppError> {
        let attempts: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE otp_codes
            SET attempts = attempts + 1
            WHERE id = $1 AND attempts < $2 AND expires_at > NOW()
            RETURNING attempts
            "#,
        )
        .bind(id)
        .bind(max_attempts)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(attempts)
    }

    async fn delete_for_email(&self, email: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM otp_codes WHERE email = $1")
            .bind(email)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
