use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use palitha_shared::{Error, SubmissionResponse};

/// Maps a command [`Error`] onto the submission wire contract.
///
/// Field errors answer 400 with the error map, user errors answer 400 with their message and
/// anything else answers 500 with `failure`, the endpoint's generic apology.
pub struct ApiError {
    error: Error,
    failure: &'static str,
}

impl ApiError {
    pub fn new(error: impl Into<Error>, failure: &'static str) -> Self {
        Self {
            error: error.into(),
            failure,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.error {
            Error::Validate(errors) => (StatusCode::BAD_REQUEST, SubmissionResponse::rejected(errors)),
            Error::User(message) => (StatusCode::BAD_REQUEST, SubmissionResponse::failed(message)),
            Error::Unknown(e) => {
                tracing::error!("Unexpected error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SubmissionResponse::failed(self.failure),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
