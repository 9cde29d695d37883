//! Form controllers for the website's submission endpoints.
//!
//! A controller owns the field values, the errors to display and a [`SubmissionStatus`]. The
//! rendering layer feeds it edits and submit events and reads the state back.

mod contact_form;
mod newsletter_form;
mod transport;

pub use contact_form::ContactForm;
pub use newsletter_form::{NewsletterForm, SUBSCRIBE_FAILURE};
pub use transport::*;

use strum::{AsRefStr, Display};

/// Where a form stands relative to its most recent submit attempt.
///
/// Informational only: no status prevents another edit or submit.
#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// What a call to `on_submit` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed and no request was sent.
    Invalid,
    /// The server acknowledged the submission and the form was reset.
    Accepted,
    /// The server answered with validation errors.
    Rejected,
    /// Transport failure or a generic server error.
    Failed,
}
