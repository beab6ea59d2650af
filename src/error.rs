use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cohousy_contact::InvalidReason;
use cohousy_notification::NotificationError;
use serde_json::json;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    Invalid(InvalidReason),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Delivery error: {0}")]
    Delivery(#[from] NotificationError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            ContactError::Invalid(reason) => {
                tracing::info!(%reason, "Contact submission rejected");
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            ContactError::MalformedBody(e) => {
                tracing::error!("Contact form error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
            ContactError::Delivery(e) => {
                tracing::error!("Contact form error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
