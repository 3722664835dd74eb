#![allow(dead_code)]

use sqlx::PgPool;

pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, 'x') RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_link(pool: &PgPool, code: &str, destination: &str, owner: Option<i64>) {
    sqlx::query("INSERT INTO links (code, destination, owner_id) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(destination)
        .bind(owner)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_dated_link(
    pool: &PgPool,
    code: &str,
    destination: &str,
    owner: i64,
    age_minutes: i32,
) {
    sqlx::query(
        "INSERT INTO links (code, destination, owner_id, created_at)
         VALUES ($1, $2, $3, NOW() - make_interval(mins => $4))",
    )
    .bind(code)
    .bind(destination)
    .bind(owner)
    .bind(age_minutes)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn clicks_of(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
