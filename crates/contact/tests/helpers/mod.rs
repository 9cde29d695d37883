use std::sync::Arc;

use async_trait::async_trait;
use palitha_contact::{Command, MemoryOutbox, Outbox};
use palitha_shared::{ContactSubmission, NewsletterSignup};

pub const RECIPIENT: &str = "info@palitha.localhost";

pub fn setup_command() -> (Command, Arc<MemoryOutbox>) {
    let outbox = Arc::new(MemoryOutbox::default());
    let command = Command::with_outbox(outbox.clone(), RECIPIENT);

    (command, outbox)
}

#[allow(dead_code)]
pub fn john_doe() -> ContactSubmission {
    ContactSubmission {
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email: "john@example.com".to_owned(),
        phone: "(555) 123-4567".to_owned(),
        project_type: "residential".to_owned(),
        service: "windows-doors".to_owned(),
        message: "Need new windows".to_owned(),
        contact_method: "email".to_owned(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub struct BrokenOutbox;

#[async_trait]
impl Outbox for BrokenOutbox {
    async fn deliver_contact(&self, _to: &str, _submission: &ContactSubmission) -> anyhow::Result<()> {
        anyhow::bail!("smtp unreachable")
    }

    async fn deliver_signup(&self, _signup: &NewsletterSignup) -> anyhow::Result<()> {
        anyhow::bail!("smtp unreachable")
    }
}
