//! Field rules shared by the form controllers and the submission endpoints.
//!
//! Every rule here is a pure function. The `validator` derives on
//! [`ContactSubmission`](crate::ContactSubmission) and
//! [`NewsletterSignup`](crate::NewsletterSignup) call into the custom rules below, so the client and the
//! server always agree on what a valid submission is.

use regex::Regex;
use std::{borrow::Cow, str::FromStr, sync::LazyLock};
use validator::ValidationError;

use crate::contact::{ContactMethod, ProjectType, Service};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_PHONE: &str = "Please enter a valid phone number";
pub const INVALID_PROJECT_TYPE: &str = "Please select a valid project type";
pub const INVALID_SERVICE: &str = "Please select a valid service";
pub const INVALID_CONTACT_METHOD: &str = "Please select a valid contact method";

/// Minimum number of digits accepted in a phone number.
pub const PHONE_MIN_DIGITS: usize = 7;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").unwrap());

static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\+?[0-9]{{{PHONE_MIN_DIGITS},}}$")).unwrap()
});

/// Exactly one `@`, a non-empty local part and a dotted domain whose segments are all non-empty.
pub fn is_valid_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

/// Spaces, parentheses and hyphens are ignored; what remains must be an optional `+` followed by
/// at least [`PHONE_MIN_DIGITS`] digits.
pub fn is_valid_phone(value: &str) -> bool {
    let compact = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-'))
        .collect::<String>();

    RE_PHONE.is_match(&compact)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Carries no message: the caller knows which field failed and words it as `"<Field> is required"`.
pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

pub(crate) fn email_address(value: &str) -> Result<(), ValidationError> {
    required(value)?;

    if !is_valid_email(value.trim()) {
        return Err(invalid("email", INVALID_EMAIL));
    }

    Ok(())
}

pub(crate) fn phone_number(value: &str) -> Result<(), ValidationError> {
    required(value)?;

    if !is_valid_phone(value.trim()) {
        return Err(invalid("phone", INVALID_PHONE));
    }

    Ok(())
}

pub(crate) fn project_type(value: &str) -> Result<(), ValidationError> {
    choice::<ProjectType>(value, INVALID_PROJECT_TYPE)
}

pub(crate) fn service(value: &str) -> Result<(), ValidationError> {
    choice::<Service>(value, INVALID_SERVICE)
}

pub(crate) fn contact_method(value: &str) -> Result<(), ValidationError> {
    choice::<ContactMethod>(value, INVALID_CONTACT_METHOD)
}

fn choice<T: FromStr>(value: &str, message: &'static str) -> Result<(), ValidationError> {
    required(value)?;

    if T::from_str(value).is_err() {
        return Err(invalid("choice", message));
    }

    Ok(())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
