//! Field validation tests — name/title lengths, date parsing and the
//! not-in-the-future rule, grade bounds, username and password rules.

use chrono::NaiveDate;
use coursehub::auth::validate::*;

#[test]
fn test_required_field() {
    assert!(validate_required("", "First name", MAX_NAME_LEN).is_some());
    assert!(validate_required("   ", "First name", MAX_NAME_LEN).is_some());
    assert!(validate_required("Ivan", "First name", MAX_NAME_LEN).is_none());

    let too_long = "x".repeat(MAX_NAME_LEN + 1);
    let msg = validate_required(&too_long, "First name", MAX_NAME_LEN).unwrap();
    assert!(msg.contains("at most 30"));

    let exactly = "x".repeat(MAX_NAME_LEN);
    assert!(validate_required(&exactly, "First name", MAX_NAME_LEN).is_none());
}

#[test]
fn test_optional_field() {
    assert!(validate_optional("", "Description", MAX_DESCRIPTION_LEN).is_none());
    assert!(validate_optional("short", "Description", MAX_DESCRIPTION_LEN).is_none());

    let too_long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
    assert!(validate_optional(&too_long, "Description", MAX_DESCRIPTION_LEN).is_some());
}

#[test]
fn test_parse_date() {
    assert_eq!(
        parse_date("2023-09-01").unwrap(),
        NaiveDate::from_ymd_opt(2023, 9, 1).unwrap()
    );
    assert_eq!(parse_date(" 2023-09-01 ").unwrap(), parse_date("2023-09-01").unwrap());

    assert!(parse_date("01.09.2023").is_err());
    assert!(parse_date("not-a-date").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_receipt_date_not_in_future() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    assert!(validate_receipt_date(today, today).is_none());
    assert!(validate_receipt_date(today.pred_opt().unwrap(), today).is_none());

    let tomorrow = today.succ_opt().unwrap();
    let msg = validate_receipt_date(tomorrow, today).unwrap();
    assert!(msg.contains("future"));
}

#[test]
fn test_grade_bounds() {
    assert!(validate_grade(0).is_some());
    assert!(validate_grade(6).is_some());
    assert!(validate_grade(-1).is_some());
    for g in 1..=5 {
        assert!(validate_grade(g).is_none());
    }
}

#[test]
fn test_username_rules() {
    assert!(validate_username("").is_some());
    assert!(validate_username("a").is_some());
    assert!(validate_username(&"a".repeat(51)).is_some());
    assert!(validate_username("has space").is_some());
    assert!(validate_username("ok_name2").is_none());
}

#[test]
fn test_password_rules() {
    assert!(validate_password("").is_some());
    assert!(validate_password("short").is_some());
    assert!(validate_password("long enough").is_none());
}
