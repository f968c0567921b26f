use std::sync::LazyLock;

use regex::Regex;

use crate::errors::AppError;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Invalid email format";

/// Permissive email shape: non-space/non-`@` run, `@`, another run, `.`,
/// another run. Deliberately not RFC 5322; must stay this loose.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A contact submission that passed validation: all fields trimmed, email
/// lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Checks required fields first, then the email shape, in that order.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ValidContact, AppError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(AppError::Validation(ALL_FIELDS_REQUIRED));
    }

    if !EMAIL_SHAPE.is_match(email) {
        return Err(AppError::Validation(INVALID_EMAIL));
    }

    Ok(ValidContact {
        name: name.to_string(),
        email: email.to_lowercase(),
        message: message.to_string(),
    })
}
