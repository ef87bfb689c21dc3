use actix_session::Session;

use crate::errors::AppError;
use crate::models::user::User;

/// Session view of the logged-in user, handed to templates via `PageContext`.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
}

impl SessionUser {
    /// The modify rule used across the app: staff may touch anything,
    /// everyone else only records they own.
    pub fn owns_or_staff(&self, owner_id: i64) -> bool {
        self.is_staff || self.id == owner_id
    }
}

/// Read the current user out of the session, if any.
pub fn current_user(session: &Session) -> Option<SessionUser> {
    let id = session.get::<i64>("user_id").unwrap_or(None)?;
    let username = session.get::<String>("username").unwrap_or(None)?;
    let is_staff = session.get::<bool>("is_staff").unwrap_or(None).unwrap_or(false);
    Some(SessionUser { id, username, is_staff })
}

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

/// Like `current_user`, but an error when nobody is logged in. For handlers
/// behind `require_auth` where a missing session is a bug, not a redirect.
pub fn require_user(session: &Session) -> Result<SessionUser, AppError> {
    current_user(session).ok_or_else(|| AppError::Session("Not logged in".to_string()))
}

/// Store the authenticated user in the session.
pub fn log_in(session: &Session, user: &User) {
    let _ = session.insert("user_id", user.id);
    let _ = session.insert("username", &user.username);
    let _ = session.insert("is_staff", user.is_staff);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
