//! Integration tests for validation module
//!
//! Exercises whole-form validation the way the task and account forms use it.

use tasktime_common::validation::{
    DateValidator, EmailValidator, StringValidator, ValidationError, Validator,
};

fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    let mut validator = Validator::new();
    validator
        .validate_field("username", username, &StringValidator::new().min_length(3))
        .validate_field("email", email, &EmailValidator::new())
        .validate_field("password", password, &StringValidator::new().trim(false).min_length(6));
    validator.finish()
}

/// Test a clean form
#[test]
fn test_valid_registration() {
    assert!(validate_registration("ada", "ada@example.com", "secret").is_ok());
}

/// Every failing field is reported, not just the first
#[test]
fn test_invalid_registration_reports_each_field() {
    let err = validate_registration("ad", "ada", "123").unwrap_err();

    assert_eq!(err.error_count(), 3);
    assert_eq!(err.message_for("username"), Some("Must be at least 3 characters"));
    assert_eq!(err.message_for("email"), Some("Invalid email format"));
    assert_eq!(err.message_for("password"), Some("Must be at least 6 characters"));
}

/// Whitespace counts toward password length
#[test]
fn test_password_is_not_trimmed() {
    assert!(validate_registration("ada", "ada@example.com", "  abcd").is_ok());
}

/// Task title limits
#[test]
fn test_title_required_and_capped() {
    let title = StringValidator::new().not_empty().max_length(255).required_message("Title is required");

    let mut validator = Validator::new();
    validator.validate_field("title", "   ", &title);
    assert_eq!(validator.finish().unwrap_err().message_for("title"), Some("Title is required"));

    let long = "x".repeat(256);
    let mut validator = Validator::new();
    validator.validate_field("title", long.as_str(), &title);
    assert_eq!(
        validator.finish().unwrap_err().message_for("title"),
        Some("Must not exceed 255 characters")
    );
}

/// Optional dates
#[test]
fn test_due_date_optional() {
    let mut validator = Validator::new();
    validator
        .validate_field("due_date", "", &DateValidator::new())
        .validate_field("start", "2024-06-01", &DateValidator::new());
    assert!(validator.finish().is_ok());

    let mut validator = Validator::new();
    validator.validate_field("due_date", "tomorrow", &DateValidator::new());
    assert!(validator.has_errors());
}
