//! Shared setup for router-level tests: an in-memory mailer and request helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use cohousy::{AppState, router};
use cohousy_notification::{ContactNotifier, Mailer, NotificationError, OutgoingEmail};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const STAFF_ADDRESS: &str = "staff@cohousy.localhost";

/// Records every email instead of talking to a relay. With `fail_at`, the
/// n-th dispatch (0-based) fails the way a rejected login would.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    attempts: Mutex<usize>,
    fail_at: Option<usize>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_at(attempt: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_at: Some(attempt),
            ..Default::default()
        })
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };

        if self.fail_at == Some(attempt) {
            let err = "relay@".parse::<lettre::Address>().unwrap_err();
            return Err(NotificationError::Address(err));
        }

        self.sent.lock().unwrap().push(email);

        Ok(())
    }
}

pub fn create_test_app(mailer: Arc<RecordingMailer>) -> Router {
    router(AppState {
        notifier: ContactNotifier::new(mailer, STAFF_ADDRESS),
    })
}

pub async fn post_contact(app: &Router, body: impl Into<String>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}
