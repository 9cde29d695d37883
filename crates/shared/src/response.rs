use serde::{Deserialize, Serialize};

use crate::FieldErrors;

pub const CONTACT_PATH: &str = "/api/contact";
pub const NEWSLETTER_PATH: &str = "/api/newsletter";

pub const CONTACT_ACKNOWLEDGEMENT: &str =
    "Your message has been sent successfully. We will contact you shortly.";
pub const CONTACT_FAILURE: &str =
    "An error occurred while processing your request. Please try again later.";
pub const NEWSLETTER_ACKNOWLEDGEMENT: &str = "Successfully subscribed to newsletter";
pub const NEWSLETTER_FAILURE: &str =
    "An error occurred while processing your subscription. Please try again later.";

/// Body of every submission endpoint reply.
///
/// `errors` is only present on validation failures and `message` on everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl SubmissionResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn rejected(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: None,
            errors: Some(errors),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            errors: None,
        }
    }
}
