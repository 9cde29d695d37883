#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use palitha::{AppState, router};
use palitha_contact::{Command, MemoryOutbox};
use serde_json::Value;
use tower::ServiceExt;

pub const RECIPIENT: &str = "info@palitha.localhost";

pub fn setup_app() -> (Router, Arc<MemoryOutbox>) {
    let outbox = Arc::new(MemoryOutbox::default());
    let command = Command::with_outbox(outbox.clone(), RECIPIENT);

    (router(AppState { command }), outbox)
}

/// Sends `body` as-is to `path` and returns the status and the decoded JSON reply.
pub async fn post(
    app: &Router,
    path: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut request = Request::builder().method(Method::POST).uri(path);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    let response = app.clone().oneshot(request.body(body.into())?).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}

pub async fn post_json(
    app: &Router,
    path: &str,
    body: &Value,
) -> anyhow::Result<(StatusCode, Value)> {
    post(app, path, Some("application/json"), body.to_string()).await
}

pub fn john_doe() -> Value {
    serde_json::json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john@example.com",
        "phone": "(555) 123-4567",
        "company": "",
        "projectType": "residential",
        "service": "windows-doors",
        "message": "Need new windows",
        "budget": "",
        "contactMethod": "email"
    })
}
