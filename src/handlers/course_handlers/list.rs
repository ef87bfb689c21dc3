use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::auth::session::require_user;
use crate::errors::{AppError, render};
use crate::models::{course, enrollment, review, student};
use crate::templates_structs::{
    CourseDetailTemplate, CourseListTemplate, CourseReviewsTemplate, CourseStudentsTemplate,
    PageContext,
};

pub async fn list(
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let courses = course::find_all(&pool).await?;
    render(CourseListTemplate { ctx, courses, error: None })
}

/// Course page. Behind `require_auth`; a logged-in user without a student
/// profile is sent off to create one first.
pub async fn detail(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&session)?;
    let id = path.into_inner();
    let found = course::find_detail_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let Some(profile) = student::find_by_user_id(&pool, user.id).await? else {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/students/new"))
            .finish());
    };

    let sitc = enrollment::is_enrolled(&pool, profile.id, found.id).await?;
    let can_manage = user.owns_or_staff(found.user_id);

    let ctx = PageContext::build(&session);
    render(CourseDetailTemplate { ctx, course: found, sitc, can_manage })
}

/// Roster of enrolled students.
pub async fn students(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = course::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    let students = enrollment::students_for_course(&pool, id).await?;

    let ctx = PageContext::build(&session);
    render(CourseStudentsTemplate { ctx, course: found, students })
}

pub async fn reviews(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = course::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    let reviews = review::find_by_course(&pool, id).await?;

    let ctx = PageContext::build(&session);
    render(CourseReviewsTemplate { ctx, course: found, reviews })
}
