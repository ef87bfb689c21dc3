use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "main.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub student_count: i64,
    pub course_count: i64,
    pub review_count: i64,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
}
