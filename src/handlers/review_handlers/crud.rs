use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::auth::session::{current_user, require_user};
use crate::auth::{csrf, validate};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::review::{self, ReviewForm};
use crate::models::{course, student};
use crate::templates_structs::{PageContext, ReviewFormTemplate};

fn redirect_to(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Returns the trimmed text and the grade, or the error to show.
fn validate_review_form(form: &ReviewForm) -> Result<(String, i64), String> {
    if let Some(e) = validate::validate_optional(&form.review_text, "Review", validate::MAX_REVIEW_LEN) {
        return Err(e);
    }
    if let Some(e) = validate::validate_grade(form.grade) {
        return Err(e);
    }
    Ok((form.review_text.trim().to_string(), form.grade))
}

/// Review form for a course. Behind `require_auth`; needs a student profile.
pub async fn new_form(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&session)?;
    let course_id = path.into_inner();
    let found = course::find_by_id(&pool, course_id).await?.ok_or(AppError::NotFound)?;

    if student::find_by_user_id(&pool, user.id).await?.is_none() {
        let _ = session.insert("flash", "Create a student profile before reviewing a course");
        return Ok(redirect_to("/students/new".to_string()));
    }

    let ctx = PageContext::build(&session);
    let tmpl = ReviewFormTemplate {
        ctx,
        form_action: format!("/courses/{course_id}/reviews/new"),
        form_title: "Leave a review".to_string(),
        course_title: found.title,
        review_text: String::new(),
        grade: 5,
        error: None,
    };
    render(tmpl)
}

pub async fn create(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = require_user(&session)?;

    let course_id = path.into_inner();
    let found = course::find_by_id(&pool, course_id).await?.ok_or(AppError::NotFound)?;

    let Some(profile) = student::find_by_user_id(&pool, user.id).await? else {
        let _ = session.insert("flash", "Create a student profile before reviewing a course");
        return Ok(redirect_to("/students/new".to_string()));
    };

    match validate_review_form(&form) {
        Ok((text, grade)) => {
            review::create(&pool, course_id, profile.id, &text, grade).await?;
            let _ = session.insert("flash", "Review submitted");
            Ok(redirect_to(format!("/courses/{course_id}/reviews")))
        }
        Err(e) => {
            let ctx = PageContext::build(&session);
            let tmpl = ReviewFormTemplate {
                ctx,
                form_action: format!("/courses/{course_id}/reviews/new"),
                form_title: "Leave a review".to_string(),
                course_title: found.title,
                review_text: form.review_text.clone(),
                grade: form.grade,
                error: Some(e),
            };
            render(tmpl)
        }
    }
}

pub async fn edit_form(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = review::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.student_user_id))
        .unwrap_or(false);

    let ctx = PageContext::build(&session);
    let tmpl = if allowed {
        ReviewFormTemplate {
            ctx,
            form_action: format!("/reviews/{id}/edit"),
            form_title: "Edit review".to_string(),
            course_title: found.course_title,
            review_text: found.review_text,
            grade: found.grade,
            error: None,
        }
    } else {
        ReviewFormTemplate {
            ctx,
            form_action: format!("/reviews/{id}/edit"),
            form_title: "Edit review".to_string(),
            course_title: found.course_title,
            review_text: String::new(),
            grade: 5,
            error: Some("You can only edit your own review".to_string()),
        }
    };
    render(tmpl)
}

pub async fn update(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let found = review::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.student_user_id))
        .unwrap_or(false);
    if !allowed {
        let ctx = PageContext::build(&session);
        let tmpl = ReviewFormTemplate {
            ctx,
            form_action: format!("/reviews/{id}/edit"),
            form_title: "Edit review".to_string(),
            course_title: found.course_title,
            review_text: String::new(),
            grade: 5,
            error: Some("You can only edit your own review".to_string()),
        };
        return render(tmpl);
    }

    match validate_review_form(&form) {
        Ok((text, grade)) => {
            review::update(&pool, id, &text, grade).await?;
            let _ = session.insert("flash", "Review updated");
            Ok(redirect_to("/reviews".to_string()))
        }
        Err(e) => {
            let ctx = PageContext::build(&session);
            let tmpl = ReviewFormTemplate {
                ctx,
                form_action: format!("/reviews/{id}/edit"),
                form_title: "Edit review".to_string(),
                course_title: found.course_title,
                review_text: form.review_text.clone(),
                grade: form.grade,
                error: Some(e),
            };
            render(tmpl)
        }
    }
}

pub async fn delete(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let found = review::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.student_user_id))
        .unwrap_or(false);
    if !allowed {
        let _ = session.insert("flash", "You can only delete your own review");
        return Ok(redirect_to("/reviews".to_string()));
    }

    review::delete(&pool, id).await?;
    let _ = session.insert("flash", "Review deleted");
    Ok(redirect_to("/reviews".to_string()))
}
