use axum::http::StatusCode;
use palitha_shared::{CONTACT_ACKNOWLEDGEMENT, CONTACT_FAILURE};
use serde_json::json;

mod helpers;

#[tokio::test]
async fn valid_submission_is_acknowledged() -> anyhow::Result<()> {
    let (app, outbox) = helpers::setup_app();

    let (status, body) = helpers::post_json(&app, "/api/contact", &helpers::john_doe()).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": CONTACT_ACKNOWLEDGEMENT })
    );

    let delivered = outbox.contacts();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0, helpers::RECIPIENT);
    assert_eq!(delivered[0].1.email, "john@example.com");

    Ok(())
}

#[tokio::test]
async fn invalid_submission_returns_field_errors() -> anyhow::Result<()> {
    let (app, outbox) = helpers::setup_app();

    let mut payload = helpers::john_doe();
    payload["email"] = json!("invalid-email");
    payload["phone"] = json!("abc");
    payload["projectType"] = json!("garden");

    let (status, body) = helpers::post_json(&app, "/api/contact", &payload).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "errors": {
                "email": "Please enter a valid email address",
                "phone": "Please enter a valid phone number",
                "projectType": "Please select a valid project type"
            }
        })
    );
    assert!(outbox.contacts().is_empty());

    Ok(())
}

#[tokio::test]
async fn missing_and_null_fields_count_as_empty() -> anyhow::Result<()> {
    let (app, _) = helpers::setup_app();

    let payload = json!({
        "firstName": null,
        "lastName": "Doe",
        "email": "john@example.com",
        "phone": 5551234567u64,
        "projectType": "commercial",
        "service": "facades",
        "message": ["not", "a", "string"]
    });

    let (status, body) = helpers::post_json(&app, "/api/contact", &payload).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!({
            "firstName": "First name is required",
            "message": "Message is required",
            "contactMethod": "Contact method is required"
        })
    );

    Ok(())
}

#[tokio::test]
async fn empty_object_reports_every_required_field() -> anyhow::Result<()> {
    let (app, _) = helpers::setup_app();

    let (status, body) = helpers::post_json(&app, "/api/contact", &json!({})).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = body["errors"].as_object().cloned().unwrap_or_default();
    assert_eq!(errors.len(), 8);
    assert_eq!(errors["projectType"], "Project type is required");
    assert_eq!(errors["service"], "Service is required");
    assert!(!errors.contains_key("company"));
    assert!(!errors.contains_key("budget"));

    Ok(())
}

#[tokio::test]
async fn malformed_json_is_an_internal_error() -> anyhow::Result<()> {
    let (app, outbox) = helpers::setup_app();

    let (status, body) =
        helpers::post(&app, "/api/contact", Some("application/json"), "{\"firstName\":").await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": CONTACT_FAILURE }));
    assert!(outbox.contacts().is_empty());

    Ok(())
}

#[tokio::test]
async fn array_body_is_read_as_having_no_fields() -> anyhow::Result<()> {
    let (app, outbox) = helpers::setup_app();

    let payload = json!([
        "John",
        "Doe",
        "john@example.com",
        "(555) 123-4567",
        "",
        "residential",
        "windows-doors",
        "Need new windows",
        "",
        "email"
    ]);

    let (status, body) = helpers::post_json(&app, "/api/contact", &payload).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let errors = body["errors"].as_object().cloned().unwrap_or_default();
    assert_eq!(errors.len(), 8);
    assert_eq!(errors["firstName"], "First name is required");
    assert_eq!(errors["contactMethod"], "Contact method is required");
    assert!(outbox.contacts().is_empty());

    Ok(())
}

#[tokio::test]
async fn null_body_is_an_internal_error() -> anyhow::Result<()> {
    let (app, outbox) = helpers::setup_app();

    let (status, body) = helpers::post_json(&app, "/api/contact", &json!(null)).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": CONTACT_FAILURE }));
    assert!(outbox.contacts().is_empty());

    Ok(())
}

#[tokio::test]
async fn missing_content_type_is_still_read() -> anyhow::Result<()> {
    let (app, _) = helpers::setup_app();

    let (status, body) =
        helpers::post(&app, "/api/contact", None, helpers::john_doe().to_string()).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let (app, _) = helpers::setup_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await?.to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body, json!({ "status": "ok" }));

    Ok(())
}
