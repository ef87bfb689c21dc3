//! Shared test infrastructure for model layer tests.
//!
//! `setup_test_db()` builds an in-memory SQLite pool with the schema applied.
//! The pool is capped at one connection so every query sees the same
//! in-memory database.

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use coursehub::db::MIGRATIONS;
use coursehub::models::{course, student};

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "password123";

// Placeholder hash for tests that never log in.
#[allow(dead_code)]
pub const DUMMY_HASH: &str = "$argon2$unused";

pub async fn setup_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Bad test DB URL")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open test DB");

    sqlx::raw_sql(MIGRATIONS)
        .execute(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[allow(dead_code)]
pub async fn insert_user(pool: &SqlitePool, username: &str, is_staff: bool) -> i64 {
    coursehub::models::user::create(pool, username, DUMMY_HASH, is_staff)
        .await
        .expect("Failed to create user")
}

#[allow(dead_code)]
pub async fn insert_student(pool: &SqlitePool, user_id: i64, first: &str, last: &str) -> i64 {
    let new = student::NewStudent {
        user_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_receipt: NaiveDate::from_ymd_opt(2022, 9, 1).unwrap(),
    };
    student::create(pool, &new).await.expect("Failed to create student")
}

#[allow(dead_code)]
pub async fn insert_course(pool: &SqlitePool, user_id: i64, title: &str) -> i64 {
    course::create(pool, user_id, title, "A course for tests")
        .await
        .expect("Failed to create course")
}
