use askama::Template;

use super::PageContext;
use crate::models::review::ReviewDetail;

#[derive(Template)]
#[template(path = "reviews.html")]
pub struct ReviewListTemplate {
    pub ctx: PageContext,
    pub reviews: Vec<ReviewDetail>,
}

#[derive(Template)]
#[template(path = "review.html")]
pub struct ReviewDetailTemplate {
    pub ctx: PageContext,
    pub review: ReviewDetail,
    pub can_manage: bool,
}

/// Shared by the create and edit flows; `review_text`/`grade` pre-fill the
/// inputs (empty text and grade 5 for a fresh form).
#[derive(Template)]
#[template(path = "review_form.html")]
pub struct ReviewFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub course_title: String,
    pub review_text: String,
    pub grade: i64,
    pub error: Option<String>,
}
