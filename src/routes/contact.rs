use axum::{Json, body::Bytes, extract::State};
use chrono::Utc;
use cohousy_contact::{ContactPayload, Validation};
use serde::Serialize;

use crate::{error::ContactError, routes::AppState};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// POST /api/contact
///
/// Staff notification first, then the acknowledgement to the visitor.
/// Any failure after validation is reported as a generic 500.
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ContactError> {
    // Parsed by hand so a malformed body lands on the 500 path, not axum's 4xx
    let payload = ContactPayload::from_json(&body)?;

    let submission = match payload.validate_submission() {
        Validation::Valid(submission) => submission,
        Validation::Invalid(reason) => return Err(ContactError::Invalid(reason)),
    };

    app_state.notifier.notify(&submission, Utc::now()).await?;

    tracing::info!(
        service = ?submission.service_type,
        property = ?submission.property_name,
        "Contact form submitted"
    );

    Ok(Json(SubmitResponse { success: true }))
}
