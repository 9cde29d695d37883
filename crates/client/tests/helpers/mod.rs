use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use palitha_client::{ContactForm, Reply, Transport, TransportError};
use palitha_shared::Field;
use serde_json::{Value, json};

/// Answers requests from a queue of canned replies and records what was sent.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Reply, TransportError>>>,
    requests: Mutex<Vec<(String, Value)>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn reply(self, status: u16, body: Value) -> Self {
        self.reply_raw(status, body.to_string())
    }

    pub fn reply_raw(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(Reply {
            status,
            body: body.into(),
        }))
    }

    pub fn fail(self, reason: &str) -> Self {
        self.push(Err(TransportError::Other(reason.to_owned())))
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    fn push(self, reply: Result<Reply, TransportError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Reply, TransportError> {
        self.requests.lock().unwrap().push((path.to_owned(), body));

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted reply".to_owned())))
    }
}

#[allow(dead_code)]
pub fn accepted() -> Value {
    json!({
        "success": true,
        "message": "Your message has been sent successfully. We will contact you shortly."
    })
}

#[allow(dead_code)]
pub fn fill_john_doe<T: Transport>(form: &mut ContactForm<T>) {
    form.on_field_change(Field::FirstName, "John");
    form.on_field_change(Field::LastName, "Doe");
    form.on_field_change(Field::Email, "john@example.com");
    form.on_field_change(Field::Phone, "(555) 123-4567");
    form.on_field_change(Field::ProjectType, "residential");
    form.on_field_change(Field::Service, "windows-doors");
    form.on_field_change(Field::Message, "Need new windows");
}
