use sqlx::SqlitePool;

use super::types::{Course, CourseDetail};

const SELECT_COURSE: &str = "\
    SELECT id, user_id, title, description, created_at, updated_at FROM courses";

/// All courses, title order.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as(&format!("{SELECT_COURSE} ORDER BY title"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as(&format!("{SELECT_COURSE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Course joined with its owner's username, for the detail page.
pub async fn find_detail_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<CourseDetail>, sqlx::Error> {
    sqlx::query_as(
        "SELECT c.id, c.user_id, c.title, c.description, u.username AS owner_username \
         FROM courses c JOIN users u ON c.user_id = u.id \
         WHERE c.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    description: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO courses (user_id, title, description) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    description: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE courses SET title = ?, description = ?, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') WHERE id = ?",
    )
    .bind(title)
    .bind(description)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await
}
