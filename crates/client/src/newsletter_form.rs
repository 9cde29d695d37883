use palitha_shared::{
    NEWSLETTER_PATH, NewsletterSignup, SubmissionResponse, validate_newsletter_signup,
};

use crate::{SubmissionStatus, SubmitOutcome, Transport, TransportError};

pub const SUBSCRIBE_FAILURE: &str = "Failed to subscribe. Please try again.";

/// Controller behind the newsletter signup modal.
///
/// Unlike the contact form it shows a single error message rather than one per field.
pub struct NewsletterForm<T> {
    transport: T,
    email: String,
    name: String,
    interests: Vec<String>,
    error: Option<String>,
    status: SubmissionStatus,
}

impl<T: Transport> NewsletterForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            email: String::new(),
            name: String::new(),
            interests: Vec::new(),
            error: None,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.error = None;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Adds `interest` when absent, removes it otherwise.
    pub fn toggle_interest(&mut self, interest: &str) {
        match self.interests.iter().position(|i| i == interest) {
            Some(pos) => {
                self.interests.remove(pos);
            }
            None => self.interests.push(interest.to_owned()),
        }
    }

    pub fn signup(&self) -> NewsletterSignup {
        let name = self.name.trim();

        NewsletterSignup {
            email: self.email.clone(),
            name: (!name.is_empty()).then(|| name.to_owned()),
            interests: self.interests.clone(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        let signup = self.signup();

        if let Some(message) = validate_newsletter_signup(&signup) {
            self.error = Some(message);

            return SubmitOutcome::Invalid;
        }

        self.status = SubmissionStatus::Submitting;
        self.error = None;

        let (ok, client_error, response) = match self.send(&signup).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "newsletter signup failed");
                self.status = SubmissionStatus::Error;
                self.error = Some(SUBSCRIBE_FAILURE.to_owned());

                return SubmitOutcome::Failed;
            }
        };

        if ok && response.success {
            self.status = SubmissionStatus::Success;
            self.email.clear();
            self.name.clear();
            self.interests.clear();

            return SubmitOutcome::Accepted;
        }

        self.status = SubmissionStatus::Error;
        self.error = Some(
            response
                .message
                .unwrap_or_else(|| SUBSCRIBE_FAILURE.to_owned()),
        );

        if client_error {
            SubmitOutcome::Rejected
        } else {
            SubmitOutcome::Failed
        }
    }

    async fn send(
        &self,
        signup: &NewsletterSignup,
    ) -> Result<(bool, bool, SubmissionResponse), TransportError> {
        let body = serde_json::to_value(signup)?;
        let reply = self.transport.post_json(NEWSLETTER_PATH, body).await?;
        let response = reply.json::<SubmissionResponse>()?;

        Ok((reply.is_success(), reply.is_client_error(), response))
    }
}
