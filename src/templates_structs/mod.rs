// Template context structures for Askama templates, organized by domain.
// All types are re-exported: `use coursehub::templates_structs::*`

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{SessionUser, current_user, take_flash};

/// Common context shared by all pages, authenticated or not.
/// Templates access these as `ctx.user`, `ctx.flash`, `ctx.csrf_token`.
pub struct PageContext {
    pub user: Option<SessionUser>,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            user: current_user(session),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

mod common;
mod course;
mod review;
mod student;

pub use self::common::{HomeTemplate, LoginTemplate, RegisterTemplate};
pub use self::course::{
    CourseDetailTemplate, CourseFormTemplate, CourseListTemplate, CourseReviewsTemplate,
    CourseStudentsTemplate,
};
pub use self::review::{ReviewDetailTemplate, ReviewFormTemplate, ReviewListTemplate};
pub use self::student::{
    StudentCoursesTemplate, StudentDetailTemplate, StudentFormTemplate, StudentListTemplate,
};
