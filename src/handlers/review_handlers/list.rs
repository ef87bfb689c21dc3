use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::auth::session::current_user;
use crate::errors::{AppError, render};
use crate::models::review;
use crate::templates_structs::{PageContext, ReviewDetailTemplate, ReviewListTemplate};

pub async fn list(
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let reviews = review::find_all(&pool).await?;
    render(ReviewListTemplate { ctx, reviews })
}

pub async fn read(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = review::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let can_manage = current_user(&session)
        .map(|u| u.owns_or_staff(found.student_user_id))
        .unwrap_or(false);

    let ctx = PageContext::build(&session);
    render(ReviewDetailTemplate { ctx, review: found, can_manage })
}
