use palitha_shared::{NEWSLETTER_ACKNOWLEDGEMENT, NewsletterSignup, validate_newsletter_signup};

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub async fn subscribe(&self, input: NewsletterSignup) -> palitha_shared::Result<String> {
        if let Some(message) = validate_newsletter_signup(&input) {
            palitha_shared::user!(message);
        }

        if let Err(err) = self.outbox.deliver_signup(&input).await {
            tracing::error!(error = %err, "failed to deliver newsletter signup");
        }

        Ok(NEWSLETTER_ACKNOWLEDGEMENT.to_owned())
    }
}
