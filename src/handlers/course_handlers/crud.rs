use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::auth::session::{current_user, require_user};
use crate::auth::{csrf, validate};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::course::{self, CourseForm};
use crate::templates_structs::{CourseFormTemplate, PageContext};

fn redirect_to_courses() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/courses"))
        .finish()
}

/// Returns the trimmed title and description, or the error to show.
fn validate_course_form(form: &CourseForm) -> Result<(String, String), String> {
    if let Some(e) = validate::validate_required(&form.title, "Title", validate::MAX_TITLE_LEN) {
        return Err(e);
    }
    if let Some(e) =
        validate::validate_optional(&form.description, "Description", validate::MAX_DESCRIPTION_LEN)
    {
        return Err(e);
    }
    Ok((
        form.title.trim().to_string(),
        form.description.trim().to_string(),
    ))
}

pub async fn new_form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let tmpl = CourseFormTemplate {
        ctx,
        form_action: "/courses/new".to_string(),
        form_title: "Create course".to_string(),
        course: None,
        error: None,
    };
    render(tmpl)
}

pub async fn create(
    pool: web::Data<SqlitePool>,
    session: Session,
    form: web::Form<CourseForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = require_user(&session)?;

    match validate_course_form(&form) {
        Ok((title, description)) => {
            course::create(&pool, user.id, &title, &description).await?;
            let _ = session.insert("flash", "Course created");
            Ok(redirect_to_courses())
        }
        Err(e) => {
            let ctx = PageContext::build(&session);
            let tmpl = CourseFormTemplate {
                ctx,
                form_action: "/courses/new".to_string(),
                form_title: "Create course".to_string(),
                course: None,
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
    let found = course::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.user_id))
        .unwrap_or(false);

    let ctx = PageContext::build(&session);
    let tmpl = if allowed {
        CourseFormTemplate {
            ctx,
            form_action: format!("/courses/{id}/edit"),
            form_title: "Edit course".to_string(),
            course: Some(found),
            error: None,
        }
    } else {
        CourseFormTemplate {
            ctx,
            form_action: format!("/courses/{id}/edit"),
            form_title: "Edit course".to_string(),
            course: None,
            error: Some("You can only edit your own course".to_string()),
        }
    };
    render(tmpl)
}

pub async fn update(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CourseForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let found = course::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.user_id))
        .unwrap_or(false);
    if !allowed {
        let ctx = PageContext::build(&session);
        let tmpl = CourseFormTemplate {
            ctx,
            form_action: format!("/courses/{id}/edit"),
            form_title: "Edit course".to_string(),
            course: None,
            error: Some("You can only edit your own course".to_string()),
        };
        return render(tmpl);
    }

    match validate_course_form(&form) {
        Ok((title, description)) => {
            course::update(&pool, id, &title, &description).await?;
            let _ = session.insert("flash", "Course updated");
            Ok(redirect_to_courses())
        }
        Err(e) => {
            let ctx = PageContext::build(&session);
            let tmpl = CourseFormTemplate {
                ctx,
                form_action: format!("/courses/{id}/edit"),
                form_title: "Edit course".to_string(),
                course: Some(found),
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
    let found = course::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.user_id))
        .unwrap_or(false);
    if !allowed {
        let _ = session.insert("flash", "You can only delete your own course");
        return Ok(redirect_to_courses());
    }

    course::delete(&pool, id).await?;
    let _ = session.insert("flash", "Course deleted");
    Ok(redirect_to_courses())
}
