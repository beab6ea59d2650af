use axum::{
    Router,
    routing::{get, post},
};
use cohousy_notification::ContactNotifier;

pub mod contact;
pub mod health;
pub mod thank_you;

#[derive(Clone)]
pub struct AppState {
    pub notifier: ContactNotifier,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/thank-you", get(thank_you::page))
        .route("/api/contact", post(contact::action))
        .with_state(app_state)
}
