use std::time::Duration;

use chrono::NaiveDate;
use cohousy_contact::{ContactPayload, InvalidReason, PreferredDate, Validation};
use strum::VariantArray;

use crate::{ServiceType, Submitter};

/// The only message shown on failure, whatever went wrong.
pub const ERROR_MESSAGE: &str = "Failed to send message. Please try again.";
pub const THANK_YOU_PATH: &str = "/thank-you";
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Fields a dialog can turn into a wire payload.
pub trait FormFields: Clone + Send + Sync {
    fn payload(&self) -> ContactPayload;

    /// Required inputs that are still empty, as wire names.
    fn missing_fields(&self) -> Vec<&'static str> {
        missing_contact_fields(self.payload())
    }
}

pub(crate) fn missing_contact_fields(payload: ContactPayload) -> Vec<&'static str> {
    match payload.validate_submission() {
        Validation::Invalid(InvalidReason::MissingRequiredFields(fields)) => fields,
        Validation::Valid(_) => Vec::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service_type: String,
    pub preferred_date: Option<PreferredDate>,
    pub property_name: String,
}

impl ContactFormData {
    pub fn select_service(&mut self, service: ServiceType) {
        self.service_type = service.to_string();
    }
}

impl FormFields for ContactFormData {
    fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: Some(self.name.to_owned()),
            email: Some(self.email.to_owned()),
            phone: Some(self.phone.to_owned()),
            message: Some(self.message.to_owned()),
            service_type: Some(self.service_type.to_owned()),
            preferred_date: self.preferred_date,
            property_name: Some(self.property_name.to_owned()),
        }
    }
}

/// Where the browser goes once a submission succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub after: Duration,
    pub to: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required inputs are empty; nothing was sent.
    Incomplete(Vec<&'static str>),
    Failed,
    Sent(Redirect),
}

/// State of a contact dialog between opening and navigation.
#[derive(Debug, Clone)]
pub struct FormDialog<F> {
    initial: F,
    data: F,
    open: bool,
    loading: bool,
    success: bool,
    error: Option<String>,
}

pub type ContactForm = FormDialog<ContactFormData>;

impl<F: FormFields> FormDialog<F> {
    /// `initial` carries the caller defaults every reset returns to.
    pub fn new(initial: F) -> Self {
        Self {
            data: initial.clone(),
            initial,
            open: false,
            loading: false,
            success: false,
            error: None,
        }
    }

    pub fn data(&self) -> &F {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut F {
        &mut self.data
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    /// Explicit close or backdrop dismiss: unsaved input is discarded.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.data = self.initial.clone();
        self.error = None;
        self.success = false;
    }

    pub async fn submit<S: Submitter + ?Sized>(&mut self, submitter: &S) -> SubmitOutcome {
        let missing = self.data.missing_fields();
        if !missing.is_empty() {
            return SubmitOutcome::Incomplete(missing);
        }

        let payload = self.data.payload();

        self.loading = true;
        self.error = None;

        let outcome = match submitter.submit(&payload).await {
            Ok(()) => {
                self.success = true;
                self.data = self.initial.clone();

                SubmitOutcome::Sent(Redirect {
                    after: REDIRECT_DELAY,
                    to: THANK_YOU_PATH,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                self.error = Some(ERROR_MESSAGE.to_owned());

                SubmitOutcome::Failed
            }
        };

        self.loading = false;

        outcome
    }

    /// Waits out the confirmation delay, closes the dialog and returns the
    /// path to navigate to.
    pub async fn finish_redirect(&mut self, redirect: Redirect) -> &'static str {
        tokio::time::sleep(redirect.after).await;

        self.open = false;
        self.success = false;

        redirect.to
    }
}

impl FormDialog<ContactFormData> {
    pub fn contact(service_type: impl Into<String>, property_name: Option<String>) -> Self {
        Self::new(ContactFormData {
            service_type: service_type.into(),
            property_name: property_name.unwrap_or_default(),
            ..Default::default()
        })
    }

    /// Property-specific dialogs hide the service picker.
    pub fn shows_service_picker(&self) -> bool {
        self.initial.property_name.is_empty()
    }

    /// Picker entries as `(value, option text)`; empty when the picker is hidden.
    pub fn service_options(&self) -> Vec<(ServiceType, &'static str)> {
        if !self.shows_service_picker() {
            return Vec::new();
        }

        ServiceType::VARIANTS
            .iter()
            .map(|service| (*service, service.label()))
            .collect()
    }

    /// Past days cannot be picked. Returns whether the selection was kept.
    pub fn select_date(&mut self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        if date.is_some_and(|date| date < today) {
            return false;
        }

        self.data.preferred_date = date.map(PreferredDate::new);

        true
    }
}
