use chrono::NaiveDate;

pub const MAX_NAME_LEN: usize = 30;
pub const MAX_TITLE_LEN: usize = 30;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_REVIEW_LEN: usize = 100;

/// Validate a username: 2-50 chars, alphanumeric and underscore only.
pub fn validate_username(username: &str) -> Option<String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Some("Username is required".to_string());
    }
    if trimmed.len() < 2 {
        return Some("Username must be at least 2 characters".to_string());
    }
    if trimmed.len() > 50 {
        return Some("Username must be at most 50 characters".to_string());
    }
    if !trimmed.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Some("Username may only contain letters, numbers, and underscores".to_string());
    }
    None
}

/// Validate a password: min 8 chars on registration.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    None
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Parse a date from an HTML date input (YYYY-MM-DD).
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Enrollment date must be a valid date (YYYY-MM-DD)".to_string())
}

/// The enrollment date may not lie after today.
pub fn validate_receipt_date(date: NaiveDate, today: NaiveDate) -> Option<String> {
    if date > today {
        return Some("Enrollment date cannot be in the future".to_string());
    }
    None
}

/// Grades run from 1 to 5.
pub fn validate_grade(grade: i64) -> Option<String> {
    if !(1..=5).contains(&grade) {
        return Some("Grade must be between 1 and 5".to_string());
    }
    None
}
