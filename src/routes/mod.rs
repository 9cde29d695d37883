use axum::{
    Router,
    routing::{get, post},
};
use palitha_shared::{CONTACT_PATH, NEWSLETTER_PATH};
use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

mod contact;
mod health;
mod newsletter;

#[derive(Clone)]
pub struct AppState {
    pub command: palitha_contact::Command,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(CONTACT_PATH, post(contact::action))
        .route(NEWSLETTER_PATH, post(newsletter::action))
        .with_state(app_state)
}

/// Reads a submission body as a JSON object.
///
/// Arrays and scalars carry no named fields and are read as `{}`, so every field falls back to
/// empty. `null` and anything that is not JSON are errors.
pub(crate) fn read_submission<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    let value = match serde_json::from_slice::<Value>(body)? {
        Value::Null => return Err(serde_json::Error::custom("submission body is null")),
        Value::Object(fields) => Value::Object(fields),
        _ => Value::Object(Map::new()),
    };

    T::deserialize(value)
}
