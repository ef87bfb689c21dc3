use askama::Template;

use super::PageContext;
use crate::models::course::{Course, CourseDetail};
use crate::models::review::ReviewDetail;
use crate::models::student::Student;

/// `error` carries the inline message of a failed enroll/unenroll attempt.
#[derive(Template)]
#[template(path = "courses.html")]
pub struct CourseListTemplate {
    pub ctx: PageContext,
    pub courses: Vec<Course>,
    pub error: Option<String>,
}

/// `sitc`: whether the viewing user's student profile is enrolled here.
#[derive(Template)]
#[template(path = "course.html")]
pub struct CourseDetailTemplate {
    pub ctx: PageContext,
    pub course: CourseDetail,
    pub sitc: bool,
    pub can_manage: bool,
}

#[derive(Template)]
#[template(path = "course_form.html")]
pub struct CourseFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub course: Option<Course>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "course_students.html")]
pub struct CourseStudentsTemplate {
    pub ctx: PageContext,
    pub course: Course,
    pub students: Vec<Student>,
}

#[derive(Template)]
#[template(path = "course_reviews.html")]
pub struct CourseReviewsTemplate {
    pub ctx: PageContext,
    pub course: Course,
    pub reviews: Vec<ReviewDetail>,
}
