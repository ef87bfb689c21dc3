use serde::Deserialize;
use sqlx::FromRow;

/// Review joined with its course title and author, which is what the pages
/// show.
/// `student_user_id` carries the author's account id for the modify check.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewDetail {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub student_id: i64,
    pub student_user_id: i64,
    pub student_first_name: String,
    pub student_last_name: String,
    pub review_text: String,
    pub grade: i64,
}

/// Form data from the create/edit review forms.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub review_text: String,
    pub grade: i64,
    pub csrf_token: String,
}
