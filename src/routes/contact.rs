use axum::{Json, body::Bytes, extract::State};
use palitha_shared::{CONTACT_FAILURE, ContactSubmission, SubmissionResponse};

use crate::{
    error::ApiError,
    routes::{AppState, read_submission},
};

/// POST /api/contact
///
/// The body is read as raw bytes so that a missing or wrong content type is handled like any
/// other unreadable payload.
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let input = read_submission::<ContactSubmission>(&body)
        .map_err(|e| ApiError::new(e, CONTACT_FAILURE))?;

    let message = app_state
        .command
        .submit_form(input)
        .await
        .map_err(|e| ApiError::new(e, CONTACT_FAILURE))?;

    Ok(Json(SubmissionResponse::accepted(message)))
}
