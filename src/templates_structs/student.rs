use askama::Template;
use chrono::NaiveDate;

use super::PageContext;
use crate::models::course::Course;
use crate::models::student::Student;

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentListTemplate {
    pub ctx: PageContext,
    pub students: Vec<Student>,
}

#[derive(Template)]
#[template(path = "student.html")]
pub struct StudentDetailTemplate {
    pub ctx: PageContext,
    pub student: Student,
    pub can_manage: bool,
}

/// Shared by the create and edit flows; `student` pre-fills the inputs and
/// `today` caps the date input.
#[derive(Template)]
#[template(path = "student_form.html")]
pub struct StudentFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub student: Option<Student>,
    pub today: NaiveDate,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "student_courses.html")]
pub struct StudentCoursesTemplate {
    pub ctx: PageContext,
    pub student: Student,
    pub courses: Vec<Course>,
}
