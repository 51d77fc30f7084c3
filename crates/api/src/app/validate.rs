//! Boundary validation for user payloads.
//!
//! Rules: username 3–20 alphanumeric characters, syntactically valid email,
//! password at least 6 characters. Violations are collected and joined into
//! a single `ValidationFailed` message, not reported one at a time.

use crate::app::dto::{CreateUserRequest, UpdateUserRequest};
use crate::app::errors::ApiError;

const USERNAME_ALPHANUMERIC: &str = "Username can only contain alphanumeric characters";
const USERNAME_LENGTH: &str = "Username must be between 3 and 20 characters long";
const EMAIL_INVALID: &str = "Invalid email address";
const PASSWORD_LENGTH: &str = "Password must be at least 6 characters long";

/// Validate a registration payload (all fields required).
pub fn validate_create(req: &CreateUserRequest) -> Result<(), ApiError> {
    let mut violations = Vec::new();
    check_username(&req.username, &mut violations);
    check_email(&req.email, &mut violations);
    check_password(&req.password, &mut violations);
    finish(violations)
}

/// Validate an update payload (only provided fields are checked).
pub fn validate_update(req: &UpdateUserRequest) -> Result<(), ApiError> {
    let mut violations = Vec::new();
    if let Some(username) = &req.username {
        check_username(username, &mut violations);
    }
    if let Some(email) = &req.email {
        check_email(email, &mut violations);
    }
    if let Some(password) = &req.password {
        check_password(password, &mut violations);
    }
    finish(violations)
}

fn finish(violations: Vec<&'static str>) -> Result<(), ApiError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(violations.join(", ")))
    }
}

fn check_username(username: &str, violations: &mut Vec<&'static str>) {
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        violations.push(USERNAME_ALPHANUMERIC);
    }
    if !(3..=20).contains(&username.chars().count()) {
        violations.push(USERNAME_LENGTH);
    }
}

fn check_email(email: &str, violations: &mut Vec<&'static str>) {
    if !is_valid_email(email) {
        violations.push(EMAIL_INVALID);
    }
}

fn check_password(password: &str, violations: &mut Vec<&'static str>) {
    if password.chars().count() < 6 {
        violations.push(PASSWORD_LENGTH);
    }
}

/// Syntactic email check: non-empty local part, non-empty dotted domain,
/// no whitespace. Deliverability is not this layer's problem.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|part| !part.is_empty())
}
