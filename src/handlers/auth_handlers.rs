use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::auth::rate_limit::RateLimiter;
use crate::auth::{csrf, password, session as auth_session, validate};
use crate::errors::{AppError, render};
use crate::models::user;
use crate::templates_structs::{LoginTemplate, PageContext, RegisterTemplate};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password1: String,
    pub password2: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // Already logged in: nothing to do here
    if auth_session::get_user_id(&session).is_some() {
        return Ok(redirect_home());
    }
    let ctx = PageContext::build(&session);
    render(LoginTemplate { ctx, error: None })
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Rate-limit check BEFORE any database access
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        let ctx = PageContext::build(&session);
        let tmpl = LoginTemplate {
            ctx,
            error: Some("Too many failed login attempts. Please try again later.".to_string()),
        };
        return render(tmpl);
    }

    let found = user::find_by_username(&pool, form.username.trim()).await?;

    if let Some(u) = found {
        if password::verify_password(&form.password, &u.password).unwrap_or(false) {
            limiter.clear(ip);
            auth_session::log_in(&session, &u);
            return Ok(redirect_home());
        }
    }

    // Same message for unknown user and wrong password
    limiter.record_failure(ip);
    let ctx = PageContext::build(&session);
    let tmpl = LoginTemplate {
        ctx,
        error: Some("Invalid username or password".to_string()),
    };
    render(tmpl)
}

pub async fn register_page(session: Session) -> Result<HttpResponse, AppError> {
    if auth_session::get_user_id(&session).is_some() {
        return Ok(redirect_home());
    }
    let ctx = PageContext::build(&session);
    render(RegisterTemplate { ctx, error: None })
}

pub async fn register_submit(
    pool: web::Data<SqlitePool>,
    session: Session,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut error = validate::validate_username(&form.username)
        .or_else(|| validate::validate_password(&form.password1));
    if error.is_none() && form.password1 != form.password2 {
        error = Some("Passwords do not match".to_string());
    }
    if error.is_none()
        && user::find_by_username(&pool, form.username.trim())
            .await?
            .is_some()
    {
        error = Some("Username is already taken".to_string());
    }

    if error.is_some() {
        let ctx = PageContext::build(&session);
        return render(RegisterTemplate { ctx, error });
    }

    let hashed = password::hash_password(&form.password1)?;
    let user_id = user::create(&pool, form.username.trim(), &hashed, false).await?;
    let created = user::find_by_id(&pool, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    auth_session::log_in(&session, &created);
    Ok(redirect_home())
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(redirect_home())
}
