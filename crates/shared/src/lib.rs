pub mod contact;
mod error;
pub mod newsletter;
mod response;
pub mod validation;

pub use contact::{ContactSubmission, Field, FieldErrors, validate_contact_form};
pub use error::*;
pub use newsletter::{NewsletterSignup, validate_newsletter_signup};
pub use response::*;
