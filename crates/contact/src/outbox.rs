use async_trait::async_trait;
use palitha_shared::{ContactSubmission, NewsletterSignup};
use std::sync::Mutex;

/// Receives submissions once they passed validation.
///
/// Callers treat delivery as fire-and-forget: a failure is logged and the visitor is still
/// acknowledged.
#[async_trait]
pub trait Outbox: Send + Sync {
    async fn deliver_contact(
        &self,
        to: &str,
        submission: &ContactSubmission,
    ) -> anyhow::Result<()>;

    async fn deliver_signup(&self, signup: &NewsletterSignup) -> anyhow::Result<()>;
}

/// Writes submissions to the log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOutbox;

#[async_trait]
impl Outbox for LogOutbox {
    async fn deliver_contact(
        &self,
        to: &str,
        submission: &ContactSubmission,
    ) -> anyhow::Result<()> {
        tracing::info!(
            to,
            name = %submission.full_name(),
            email = %submission.email,
            phone = %submission.phone,
            company = %submission.company,
            project_type = %submission.project_type,
            service = %submission.service,
            budget = %submission.budget,
            contact_method = %submission.contact_method,
            message = %submission.message,
            "Contact form submission"
        );

        Ok(())
    }

    async fn deliver_signup(&self, signup: &NewsletterSignup) -> anyhow::Result<()> {
        tracing::info!(
            email = %signup.email,
            name = ?signup.name,
            interests = ?signup.interests,
            "Newsletter signup"
        );

        Ok(())
    }
}

/// Keeps delivered submissions in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryOutbox {
    contacts: Mutex<Vec<(String, ContactSubmission)>>,
    signups: Mutex<Vec<NewsletterSignup>>,
}

impl MemoryOutbox {
    pub fn contacts(&self) -> Vec<(String, ContactSubmission)> {
        self.contacts
            .lock()
            .map(|contacts| contacts.clone())
            .unwrap_or_default()
    }

    pub fn signups(&self) -> Vec<NewsletterSignup> {
        self.signups
            .lock()
            .map(|signups| signups.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Outbox for MemoryOutbox {
    async fn deliver_contact(
        &self,
        to: &str,
        submission: &ContactSubmission,
    ) -> anyhow::Result<()> {
        self.contacts
            .lock()
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .push((to.to_owned(), submission.clone()));

        Ok(())
    }

    async fn deliver_signup(&self, signup: &NewsletterSignup) -> anyhow::Result<()> {
        self.signups
            .lock()
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .push(signup.clone());

        Ok(())
    }
}
