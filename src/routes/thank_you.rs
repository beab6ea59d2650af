use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

#[derive(Template)]
#[template(path = "thank-you.html")]
pub struct ThankYouTemplate;

/// GET /thank-you - where the contact dialog navigates after a successful send
pub async fn page() -> impl IntoResponse {
    match ThankYouTemplate.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render thank-you page: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Thank you!").into_response()
        }
    }
}
