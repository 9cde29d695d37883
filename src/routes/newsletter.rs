use axum::{Json, body::Bytes, extract::State};
use palitha_shared::{NEWSLETTER_FAILURE, NewsletterSignup, SubmissionResponse};

use crate::{
    error::ApiError,
    routes::{AppState, read_submission},
};

/// POST /api/newsletter
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let input = read_submission::<NewsletterSignup>(&body)
        .map_err(|e| ApiError::new(e, NEWSLETTER_FAILURE))?;

    let message = app_state
        .command
        .subscribe(input)
        .await
        .map_err(|e| ApiError::new(e, NEWSLETTER_FAILURE))?;

    Ok(Json(SubmissionResponse::accepted(message)))
}
