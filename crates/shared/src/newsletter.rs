use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Field;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewsletterSignup {
    #[serde(default, deserialize_with = "crate::contact::lenient_string")]
    #[validate(custom(function = "crate::validation::email_address"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub interests: Vec<String>,
}

/// Returns the message to show when the signup cannot be accepted.
pub fn validate_newsletter_signup(signup: &NewsletterSignup) -> Option<String> {
    let errors = signup.validate().err()?;
    let field_errors = errors.field_errors();
    let error = field_errors.get("email")?.first()?;

    Some(
        error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| Field::Email.required_message()),
    )
}
