use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Course with the owner's username joined in — for the detail page.
#[derive(Debug, Clone, FromRow)]
pub struct CourseDetail {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub owner_username: String,
}

/// Form data from the create/edit course forms.
#[derive(Debug, Deserialize)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub csrf_token: String,
}
