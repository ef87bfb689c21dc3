//! Rendering tests for the page templates:
//! - the inline error string appears exactly once when set, never otherwise
//! - form inputs round-trip the supplied record values
//! - course actions (edit/delete, enroll, leave/review) show and hide with
//!   ownership, staff, authentication, and enrollment state
//! - the base navigation switches between login/register and greeting/logout

use askama::Template;
use chrono::NaiveDate;

use coursehub::auth::session::SessionUser;
use coursehub::models::course::CourseDetail;
use coursehub::models::student::Student;
use coursehub::templates_structs::*;

fn anon_ctx() -> PageContext {
    PageContext {
        user: None,
        flash: None,
        csrf_token: "testtoken".to_string(),
    }
}

fn user_ctx(id: i64, is_staff: bool) -> PageContext {
    PageContext {
        user: Some(SessionUser {
            id,
            username: "alice".to_string(),
            is_staff,
        }),
        flash: None,
        csrf_token: "testtoken".to_string(),
    }
}

fn sample_student() -> Student {
    Student {
        id: 1,
        user_id: 7,
        first_name: "Ivan".to_string(),
        last_name: "Petrov".to_string(),
        date_of_receipt: NaiveDate::from_ymd_opt(2021, 9, 1).unwrap(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn sample_course() -> CourseDetail {
    CourseDetail {
        id: 1,
        user_id: 7,
        title: "Rust 101".to_string(),
        description: "Ownership and borrowing".to_string(),
        owner_username: "prof".to_string(),
    }
}

fn course_page(ctx: PageContext, sitc: bool, can_manage: bool) -> String {
    CourseDetailTemplate { ctx, course: sample_course(), sitc, can_manage }
        .render()
        .expect("Render failed")
}

// --- Error string ---

#[test]
fn test_no_error_node_when_error_unset() {
    let html = LoginTemplate { ctx: anon_ctx(), error: None }.render().unwrap();
    assert_eq!(html.matches("form-error").count(), 0);
}

#[test]
fn test_error_appears_exactly_once() {
    let html = LoginTemplate {
        ctx: anon_ctx(),
        error: Some("Invalid username or password".to_string()),
    }
    .render()
    .unwrap();

    assert_eq!(html.matches("form-error").count(), 1);
    assert_eq!(html.matches("Invalid username or password").count(), 1);
}

#[test]
fn test_student_form_error_is_styled() {
    let tmpl = StudentFormTemplate {
        ctx: user_ctx(7, false),
        form_action: "/students/1/edit".to_string(),
        form_title: "Edit student".to_string(),
        student: None,
        today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        error: Some("Enrollment date cannot be in the future".to_string()),
    };
    let html = tmpl.render().unwrap();

    assert_eq!(html.matches("Enrollment date cannot be in the future").count(), 1);
    assert!(html.contains(r#"class="form-error""#));
}

// --- Student form round-trip ---

#[test]
fn test_student_form_prefills_inputs() {
    let tmpl = StudentFormTemplate {
        ctx: user_ctx(7, false),
        form_action: "/students/1/edit".to_string(),
        form_title: "Edit student".to_string(),
        student: Some(sample_student()),
        today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        error: None,
    };
    let html = tmpl.render().unwrap();

    assert!(html.contains(r#"value="Ivan""#));
    assert!(html.contains(r#"value="Petrov""#));
    assert!(html.contains(r#"value="2021-09-01""#));
    assert!(html.contains(r#"max="2024-06-15""#));
    assert!(html.contains(r#"maxlength="30""#));
    assert!(html.contains(r#"name="csrf_token" value="testtoken""#));
}

#[test]
fn test_student_form_empty_without_record() {
    let tmpl = StudentFormTemplate {
        ctx: user_ctx(7, false),
        form_action: "/students/new".to_string(),
        form_title: "Create your student profile".to_string(),
        student: None,
        today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        error: None,
    };
    let html = tmpl.render().unwrap();

    assert!(html.contains(r#"value="""#));
    assert!(!html.contains("Ivan"));
}

// --- Course actions ---

#[test]
fn test_owner_sees_edit_and_delete() {
    let html = course_page(user_ctx(7, false), false, true);
    assert!(html.contains(r#"href="/courses/1/edit""#));
    assert!(html.contains(r#"action="/courses/1/delete""#));
}

#[test]
fn test_non_owner_sees_no_edit_or_delete() {
    let html = course_page(user_ctx(8, false), false, false);
    assert!(!html.contains(r#"href="/courses/1/edit""#));
    assert!(!html.contains(r#"action="/courses/1/delete""#));
}

#[test]
fn test_enroll_shown_when_not_enrolled() {
    let html = course_page(user_ctx(8, false), false, false);
    assert!(html.contains(r#"action="/courses/1/enroll""#));
    assert!(!html.contains(r#"action="/courses/1/unenroll""#));
    assert!(!html.contains("/courses/1/reviews/new"));
}

#[test]
fn test_leave_and_review_shown_when_enrolled() {
    let html = course_page(user_ctx(8, false), true, false);
    assert!(html.contains(r#"action="/courses/1/unenroll""#));
    assert!(html.contains("/courses/1/reviews/new"));
    assert!(!html.contains(r#"action="/courses/1/enroll""#));
}

#[test]
fn test_anonymous_sees_no_enrollment_actions() {
    let html = course_page(anon_ctx(), false, false);
    assert!(!html.contains(r#"action="/courses/1/enroll""#));
    assert!(!html.contains(r#"action="/courses/1/unenroll""#));
    assert!(!html.contains("/courses/1/reviews/new"));
}

// --- Base navigation ---

fn home_page(ctx: PageContext) -> String {
    HomeTemplate { ctx, student_count: 0, course_count: 0, review_count: 0 }
        .render()
        .unwrap()
}

#[test]
fn test_nav_for_anonymous_user() {
    let html = home_page(anon_ctx());
    assert!(html.contains(r#"href="/login""#));
    assert!(html.contains(r#"href="/register""#));
    assert!(!html.contains("Hello,"));
    assert!(!html.contains(r#"action="/logout""#));
}

#[test]
fn test_nav_for_logged_in_user() {
    let html = home_page(user_ctx(7, false));
    assert!(html.contains("Hello, alice"));
    assert!(html.contains(r#"action="/logout""#));
    assert!(!html.contains(r#"href="/login""#));
    assert!(!html.contains(r#"href="/register""#));
}

#[test]
fn test_flash_message_is_rendered() {
    let mut ctx = user_ctx(7, false);
    ctx.flash = Some("Student updated".to_string());
    let html = home_page(ctx);
    assert!(html.contains("Student updated"));
}
