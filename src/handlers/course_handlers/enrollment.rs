use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::auth::csrf;
use crate::auth::session::require_user;
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::{course, enrollment, student};
use crate::templates_structs::{CourseListTemplate, PageContext};

fn redirect_to_courses() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/courses"))
        .finish()
}

fn redirect_to_profile_form() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/students/new"))
        .finish()
}

/// Re-render the courses list with an inline error, as the failed
/// enroll/unenroll paths do.
async fn courses_with_error(
    pool: &SqlitePool,
    session: &Session,
    message: &str,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session);
    let courses = course::find_all(pool).await?;
    render(CourseListTemplate {
        ctx,
        courses,
        error: Some(message.to_string()),
    })
}

pub async fn enroll(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = require_user(&session)?;

    let id = path.into_inner();
    let found = course::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let Some(profile) = student::find_by_user_id(&pool, user.id).await? else {
        let _ = session.insert("flash", "Create a student profile before enrolling in a course");
        return Ok(redirect_to_profile_form());
    };

    if enrollment::is_enrolled(&pool, profile.id, found.id).await? {
        return courses_with_error(&pool, &session, "You are already enrolled in this course").await;
    }

    enrollment::enroll(&pool, found.id, profile.id).await?;
    let _ = session.insert("flash", "Enrolled");
    Ok(redirect_to_courses())
}

pub async fn unenroll(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = require_user(&session)?;

    let id = path.into_inner();
    let found = course::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let Some(profile) = student::find_by_user_id(&pool, user.id).await? else {
        let _ = session.insert("flash", "Create a student profile first");
        return Ok(redirect_to_profile_form());
    };

    if !enrollment::unenroll(&pool, found.id, profile.id).await? {
        return courses_with_error(&pool, &session, "You have already left this course").await;
    }

    let _ = session.insert("flash", "Left the course");
    Ok(redirect_to_courses())
}
