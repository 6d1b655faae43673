use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Reasons a signup or unregister request is rejected. All of them are
/// detected before the roster is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up")]
    DuplicateParticipant,
    #[error("Participant not found")]
    ParticipantNotFound,
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound | SignupError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            SignupError::DuplicateParticipant => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
