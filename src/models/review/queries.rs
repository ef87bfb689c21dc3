use sqlx::SqlitePool;

use super::types::ReviewDetail;

const SELECT_REVIEW_DETAIL: &str = "\
    SELECT r.id, r.course_id, c.title AS course_title, \
           r.student_id, s.user_id AS student_user_id, \
           s.first_name AS student_first_name, s.last_name AS student_last_name, \
           r.review_text, r.grade \
    FROM reviews r \
    JOIN courses c ON r.course_id = c.id \
    JOIN students s ON r.student_id = s.id";

/// All reviews, grade order.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<ReviewDetail>, sqlx::Error> {
    sqlx::query_as(&format!("{SELECT_REVIEW_DETAIL} ORDER BY r.grade, r.id"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ReviewDetail>, sqlx::Error> {
    sqlx::query_as(&format!("{SELECT_REVIEW_DETAIL} WHERE r.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Reviews for one course, grade order.
pub async fn find_by_course(
    pool: &SqlitePool,
    course_id: i64,
) -> Result<Vec<ReviewDetail>, sqlx::Error> {
    sqlx::query_as(&format!(
        "{SELECT_REVIEW_DETAIL} WHERE r.course_id = ? ORDER BY r.grade, r.id"
    ))
    .bind(course_id)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &SqlitePool,
    course_id: i64,
    student_id: i64,
    review_text: &str,
    grade: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO reviews (course_id, student_id, review_text, grade) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(course_id)
    .bind(student_id)
    .bind(review_text)
    .bind(grade)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    review_text: &str,
    grade: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE reviews SET review_text = ?, grade = ? WHERE id = ?")
        .bind(review_text)
        .bind(grade)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM reviews WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await
}
