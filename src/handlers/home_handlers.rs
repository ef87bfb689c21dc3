use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::errors::{AppError, render};
use crate::models::{course, review, student};
use crate::templates_structs::{HomeTemplate, PageContext};

pub async fn index(
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let student_count = student::count(&pool).await?;
    let course_count = course::count(&pool).await?;
    let review_count = review::count(&pool).await?;
    render(HomeTemplate { ctx, student_count, course_count, review_count })
}
