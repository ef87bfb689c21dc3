//! Review tests — creation with grade bounds, joined detail fields,
//! per-course listing, updates, and deletion.

mod common;

use common::*;
use coursehub::models::review;

async fn setup_student_and_course(pool: &sqlx::SqlitePool) -> (i64, i64) {
    let student_user = insert_user(pool, "reviewer", false).await;
    let teacher_user = insert_user(pool, "lecturer", false).await;
    let student_id = insert_student(pool, student_user, "Alexei", "Smirnov").await;
    let course_id = insert_course(pool, teacher_user, "Linear Algebra").await;
    (student_id, course_id)
}

#[tokio::test]
async fn test_create_and_read_review() {
    let pool = setup_test_db().await;
    let (student_id, course_id) = setup_student_and_course(&pool).await;

    let id = review::create(&pool, course_id, student_id, "Great pacing", 4)
        .await
        .expect("Failed to create review");

    let found = review::find_by_id(&pool, id)
        .await
        .expect("Query failed")
        .expect("Review not found");

    assert_eq!(found.course_title, "Linear Algebra");
    assert_eq!(found.student_first_name, "Alexei");
    assert_eq!(found.student_last_name, "Smirnov");
    assert_eq!(found.review_text, "Great pacing");
    assert_eq!(found.grade, 4);
}

#[tokio::test]
async fn test_grade_out_of_bounds_is_rejected() {
    let pool = setup_test_db().await;
    let (student_id, course_id) = setup_student_and_course(&pool).await;

    let too_low = review::create(&pool, course_id, student_id, "", 0).await;
    assert!(too_low.is_err());

    let too_high = review::create(&pool, course_id, student_id, "", 6).await;
    assert!(too_high.is_err());
}

#[tokio::test]
async fn test_find_by_course_and_grade_ordering() {
    let pool = setup_test_db().await;
    let (student_id, course_id) = setup_student_and_course(&pool).await;
    let other_user = insert_user(&pool, "other", false).await;
    let other_student = insert_student(&pool, other_user, "Daria", "Kuzmina").await;

    review::create(&pool, course_id, student_id, "Solid", 5).await.unwrap();
    review::create(&pool, course_id, other_student, "Too fast", 2).await.unwrap();

    let for_course = review::find_by_course(&pool, course_id).await.unwrap();
    let grades: Vec<i64> = for_course.iter().map(|r| r.grade).collect();
    assert_eq!(grades, vec![2, 5]);

    let all = review::find_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_update_review() {
    let pool = setup_test_db().await;
    let (student_id, course_id) = setup_student_and_course(&pool).await;
    let id = review::create(&pool, course_id, student_id, "Fine", 3).await.unwrap();

    review::update(&pool, id, "Better on second thought", 4)
        .await
        .expect("Failed to update review");

    let found = review::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(found.review_text, "Better on second thought");
    assert_eq!(found.grade, 4);
}

#[tokio::test]
async fn test_delete_review() {
    let pool = setup_test_db().await;
    let (student_id, course_id) = setup_student_and_course(&pool).await;
    let id = review::create(&pool, course_id, student_id, "", 5).await.unwrap();

    review::delete(&pool, id).await.expect("Failed to delete review");

    assert!(review::find_by_id(&pool, id).await.unwrap().is_none());
    assert_eq!(review::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_detail_carries_author_account_id() {
    let pool = setup_test_db().await;
    let (student_id, course_id) = setup_student_and_course(&pool).await;
    let id = review::create(&pool, course_id, student_id, "", 5).await.unwrap();

    let found = review::find_by_id(&pool, id).await.unwrap().unwrap();
    let author = coursehub::models::student::find_by_id(&pool, student_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.student_user_id, author.user_id);
}
