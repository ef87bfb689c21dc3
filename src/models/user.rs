use sqlx::{FromRow, SqlitePool};

/// Internal user struct for authentication — includes password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub is_staff: bool,
    pub created_at: String,
}

/// Find user by username for authentication. Returns internal User with password hash.
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, username, password, is_staff, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, username, password, is_staff, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Create a new user with an already-hashed password.
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    is_staff: bool,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO users (username, password, is_staff) VALUES (?, ?, ?) RETURNING id")
        .bind(username)
        .bind(password_hash)
        .bind(is_staff)
        .fetch_one(pool)
        .await
}

