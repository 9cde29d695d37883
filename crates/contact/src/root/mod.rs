use std::sync::Arc;

use crate::Outbox;

mod submit_form;
mod subscribe;

/// Server side of the submission contract.
///
/// Holds no per-request state; cloning is cheap and every clone shares the same outbox.
#[derive(Clone)]
pub struct Command {
    outbox: Arc<dyn Outbox>,
    recipient: String,
}

impl Command {
    pub fn new(outbox: impl Outbox + 'static, recipient: impl Into<String>) -> Self {
        Self::with_outbox(Arc::new(outbox), recipient)
    }

    pub fn with_outbox(outbox: Arc<dyn Outbox>, recipient: impl Into<String>) -> Self {
        Self {
            outbox,
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}
