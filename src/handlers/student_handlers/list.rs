use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::auth::session::current_user;
use crate::errors::{AppError, render};
use crate::models::{enrollment, student};
use crate::templates_structs::{
    PageContext, StudentCoursesTemplate, StudentDetailTemplate, StudentListTemplate,
};

pub async fn list(
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let students = student::find_all(&pool).await?;
    render(StudentListTemplate { ctx, students })
}

pub async fn read(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = student::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let can_manage = current_user(&session)
        .map(|u| u.owns_or_staff(found.user_id))
        .unwrap_or(false);

    let ctx = PageContext::build(&session);
    render(StudentDetailTemplate { ctx, student: found, can_manage })
}

/// Courses the student is enrolled in.
pub async fn courses(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = student::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    let courses = enrollment::courses_for_student(&pool, id).await?;

    let ctx = PageContext::build(&session);
    render(StudentCoursesTemplate { ctx, student: found, courses })
}
