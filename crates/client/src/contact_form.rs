use palitha_shared::{
    CONTACT_PATH, ContactSubmission, Field, FieldErrors, SubmissionResponse, validate_contact_form,
};

use crate::{SubmissionStatus, SubmitOutcome, Transport, TransportError};

/// Controller behind the "get a quote" contact form.
pub struct ContactForm<T> {
    transport: T,
    values: ContactSubmission,
    errors: FieldErrors,
    status: SubmissionStatus,
    notice: Option<String>,
}

impl<T: Transport> ContactForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            values: ContactSubmission::default(),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
            notice: None,
        }
    }

    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Last message returned by the server, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Stores `value` and drops the error shown for `field`. The field is not re-validated.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
    }

    #[tracing::instrument(skip(self))]
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        let errors = validate_contact_form(&self.values);
        if !errors.is_empty() {
            tracing::debug!(%errors, "contact form blocked by local validation");
            self.errors = errors;

            return SubmitOutcome::Invalid;
        }

        self.status = SubmissionStatus::Submitting;
        self.errors.clear();
        self.notice = None;

        let (ok, response) = match self.send().await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                self.status = SubmissionStatus::Error;

                return SubmitOutcome::Failed;
            }
        };

        self.notice = response.message;

        if ok && response.success {
            self.status = SubmissionStatus::Success;
            self.errors.clear();
            self.values = ContactSubmission::default();

            return SubmitOutcome::Accepted;
        }

        self.status = SubmissionStatus::Error;

        match response.errors {
            Some(errors) if !errors.is_empty() => {
                self.errors.merge(errors);

                SubmitOutcome::Rejected
            }
            _ => SubmitOutcome::Failed,
        }
    }

    async fn send(&self) -> Result<(bool, SubmissionResponse), TransportError> {
        let body = serde_json::to_value(&self.values)?;
        let reply = self.transport.post_json(CONTACT_PATH, body).await?;
        let response = reply.json::<SubmissionResponse>()?;

        Ok((reply.is_success(), response))
    }
}
