use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::types::{NewStudent, Student};

const SELECT_STUDENT: &str = "\
    SELECT id, user_id, first_name, last_name, date_of_receipt, created_at, updated_at \
    FROM students";

/// All students, last-name order.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as(&format!("{SELECT_STUDENT} ORDER BY last_name, first_name"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as(&format!("{SELECT_STUDENT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// The student profile belonging to a user account, if one exists.
pub async fn find_by_user_id(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as(&format!("{SELECT_STUDENT} WHERE user_id = ?"))
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &SqlitePool, new: &NewStudent) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO students (user_id, first_name, last_name, date_of_receipt) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(new.user_id)
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(new.date_of_receipt)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    first_name: &str,
    last_name: &str,
    date_of_receipt: NaiveDate,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE students SET first_name = ?, last_name = ?, date_of_receipt = ?, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') WHERE id = ?",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(date_of_receipt)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
}
