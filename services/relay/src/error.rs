use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the chat relay. Model warm-up and empty
/// completions are deliberately absent: both resolve to normal replies.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Message is required")]
    InvalidRequest,

    #[error("API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("completion request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } | RelayError::Network(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Conversational text shown in place of a reply when a turn fails.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::InvalidRequest => "Message is required".to_string(),
            _ => "Failed to process your message. Please try again.".to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            RelayError::InvalidRequest => json!({ "error": self.user_message() }),
            _ => json!({
                "error": self.user_message(),
                "details": self.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
