use sqlx::SqlitePool;

use crate::models::course::Course;
use crate::models::student::Student;

/// Whether the student is in the course — the `sitc` flag of the course page.
pub async fn is_enrolled(
    pool: &SqlitePool,
    student_id: i64,
    course_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM enrollments WHERE student_id = ? AND course_id = ?",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(pool)
    .await
}

pub async fn enroll(
    pool: &SqlitePool,
    course_id: i64,
    student_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO enrollments (course_id, student_id) VALUES (?, ?) RETURNING id",
    )
    .bind(course_id)
    .bind(student_id)
    .fetch_one(pool)
    .await
}

/// Remove an enrollment. Returns false when there was nothing to remove.
pub async fn unenroll(
    pool: &SqlitePool,
    course_id: i64,
    student_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM enrollments WHERE course_id = ? AND student_id = ?")
        .bind(course_id)
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Roster of a course, last-name order.
pub async fn students_for_course(
    pool: &SqlitePool,
    course_id: i64,
) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as(
        "SELECT s.id, s.user_id, s.first_name, s.last_name, s.date_of_receipt, \
                s.created_at, s.updated_at \
         FROM students s JOIN enrollments e ON e.student_id = s.id \
         WHERE e.course_id = ? \
         ORDER BY s.last_name, s.first_name",
    )
    .bind(course_id)
    .fetch_all(pool)
    .await
}

/// Courses a student is enrolled in, title order.
pub async fn courses_for_student(
    pool: &SqlitePool,
    student_id: i64,
) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as(
        "SELECT c.id, c.user_id, c.title, c.description, c.created_at, c.updated_at \
         FROM courses c JOIN enrollments e ON e.course_id = c.id \
         WHERE e.student_id = ? \
         ORDER BY c.title",
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM enrollments")
        .fetch_one(pool)
        .await
}
