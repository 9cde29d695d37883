use palitha_shared::{CONTACT_ACKNOWLEDGEMENT, ContactSubmission, validate_contact_form};

impl super::Command {
    /// Re-validates a contact submission and forwards it when it passes.
    ///
    /// Returns the acknowledgement to show the visitor.
    #[tracing::instrument(skip_all, fields(project_type = %input.project_type, service = %input.service))]
    pub async fn submit_form(&self, input: ContactSubmission) -> palitha_shared::Result<String> {
        let errors = validate_contact_form(&input);
        if !errors.is_empty() {
            tracing::debug!(%errors, "contact submission rejected");

            return Err(errors.into());
        }

        if let Err(err) = self.outbox.deliver_contact(&self.recipient, &input).await {
            tracing::error!(error = %err, "failed to deliver contact submission");
        }

        Ok(CONTACT_ACKNOWLEDGEMENT.to_owned())
    }
}
