use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::auth::session::{current_user, require_user};
use crate::auth::{csrf, validate};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::student::{self, NewStudent, StudentForm};
use crate::templates_structs::{PageContext, StudentFormTemplate};

fn redirect_to_students() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/students"))
        .finish()
}

/// Check the form fields; returns the trimmed names and the parsed date,
/// or the single error message to show the user.
fn validate_student_form(
    form: &StudentForm,
    today: NaiveDate,
) -> Result<(String, String, NaiveDate), String> {
    if let Some(e) = validate::validate_required(&form.first_name, "First name", validate::MAX_NAME_LEN) {
        return Err(e);
    }
    if let Some(e) = validate::validate_required(&form.last_name, "Last name", validate::MAX_NAME_LEN) {
        return Err(e);
    }
    let date = validate::parse_date(&form.date_of_receipt)?;
    if let Some(e) = validate::validate_receipt_date(date, today) {
        return Err(e);
    }
    Ok((
        form.first_name.trim().to_string(),
        form.last_name.trim().to_string(),
        date,
    ))
}

pub async fn new_form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let tmpl = StudentFormTemplate {
        ctx,
        form_action: "/students/new".to_string(),
        form_title: "Create your student profile".to_string(),
        student: None,
        today: chrono::Local::now().date_naive(),
        error: None,
    };
    render(tmpl)
}

pub async fn create(
    pool: web::Data<SqlitePool>,
    session: Session,
    form: web::Form<StudentForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = require_user(&session)?;

    let today = chrono::Local::now().date_naive();

    // One profile per account
    let mut error = None;
    if student::find_by_user_id(&pool, user.id).await?.is_some() {
        error = Some("You have already created a student profile".to_string());
    }
    if error.is_none() {
        match validate_student_form(&form, today) {
            Ok((first_name, last_name, date)) => {
                let new = NewStudent {
                    user_id: user.id,
                    first_name,
                    last_name,
                    date_of_receipt: date,
                };
                student::create(&pool, &new).await?;
                let _ = session.insert("flash", "Student profile created");
                return Ok(redirect_to_students());
            }
            Err(e) => error = Some(e),
        }
    }

    let ctx = PageContext::build(&session);
    let tmpl = StudentFormTemplate {
        ctx,
        form_action: "/students/new".to_string(),
        form_title: "Create your student profile".to_string(),
        student: None,
        today,
        error,
    };
    render(tmpl)
}

pub async fn edit_form(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = student::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    let today = chrono::Local::now().date_naive();

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.user_id))
        .unwrap_or(false);

    let ctx = PageContext::build(&session);
    let tmpl = if allowed {
        StudentFormTemplate {
            ctx,
            form_action: format!("/students/{id}/edit"),
            form_title: "Edit student".to_string(),
            student: Some(found),
            today,
            error: None,
        }
    } else {
        StudentFormTemplate {
            ctx,
            form_action: format!("/students/{id}/edit"),
            form_title: "Edit student".to_string(),
            student: None,
            today,
            error: Some("You can only edit your own student profile".to_string()),
        }
    };
    render(tmpl)
}

pub async fn update(
    pool: web::Data<SqlitePool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<StudentForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let found = student::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    let today = chrono::Local::now().date_naive();

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.user_id))
        .unwrap_or(false);
    if !allowed {
        let ctx = PageContext::build(&session);
        let tmpl = StudentFormTemplate {
            ctx,
            form_action: format!("/students/{id}/edit"),
            form_title: "Edit student".to_string(),
            student: None,
            today,
            error: Some("You can only edit your own student profile".to_string()),
        };
        return render(tmpl);
    }

    match validate_student_form(&form, today) {
        Ok((first_name, last_name, date)) => {
            student::update(&pool, id, &first_name, &last_name, date).await?;
            let _ = session.insert("flash", "Student updated");
            Ok(redirect_to_students())
        }
        Err(e) => {
            let ctx = PageContext::build(&session);
            let tmpl = StudentFormTemplate {
                ctx,
                form_action: format!("/students/{id}/edit"),
                form_title: "Edit student".to_string(),
                student: Some(found),
                today,
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
    let found = student::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let allowed = current_user(&session)
        .map(|u| u.owns_or_staff(found.user_id))
        .unwrap_or(false);
    if !allowed {
        let _ = session.insert("flash", "You can only delete your own student profile");
        return Ok(redirect_to_students());
    }

    student::delete(&pool, id).await?;
    let _ = session.insert("flash", "Student deleted");
    Ok(redirect_to_students())
}
