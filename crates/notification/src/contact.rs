//! Contact form emails: the staff notification and the visitor acknowledgement.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cohousy_contact::ContactSubmission;

use crate::{Mailer, NotificationError, OutgoingEmail};

pub const ACKNOWLEDGEMENT_SUBJECT: &str = "Thank you for your inquiry - Cohousy";

const STAFF_SUBJECT: &str = "New Contact Form Submission";
const UNSPECIFIED_SERVICE: &str = "Not specified";

struct Inquiry<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    property_name: Option<&'a str>,
    preferred_date: Option<String>,
    message_lines: Vec<&'a str>,
    submitted_at: String,
}

impl<'a> Inquiry<'a> {
    fn new(submission: &'a ContactSubmission, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: &submission.name,
            email: &submission.email,
            phone: &submission.phone,
            service: submission
                .service_type
                .as_deref()
                .unwrap_or(UNSPECIFIED_SERVICE),
            property_name: submission.property_name.as_deref(),
            preferred_date: submission.preferred_date.map(|date| date.to_string()),
            message_lines: submission
                .message
                .as_deref()
                .map(|message| message.lines().collect())
                .unwrap_or_default(),
            submitted_at: submitted_at.format("%-d %B %Y, %H:%M:%S UTC").to_string(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "contact-staff.html")]
struct StaffHtmlTemplate<'a> {
    inquiry: &'a Inquiry<'a>,
}

#[derive(askama::Template)]
#[template(path = "contact-staff.txt")]
struct StaffPlainTemplate<'a> {
    inquiry: &'a Inquiry<'a>,
}

#[derive(askama::Template)]
#[template(path = "contact-acknowledgement.html")]
struct AcknowledgementHtmlTemplate<'a> {
    inquiry: &'a Inquiry<'a>,
}

#[derive(askama::Template)]
#[template(path = "contact-acknowledgement.txt")]
struct AcknowledgementPlainTemplate<'a> {
    inquiry: &'a Inquiry<'a>,
}

/// `New Contact Form Submission - {service} - {property}`, each suffix only
/// when present.
pub fn staff_subject(submission: &ContactSubmission) -> String {
    [
        Some(STAFF_SUBJECT),
        submission.service_type.as_deref(),
        submission.property_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" - ")
}

/// Relays contact submissions to staff and acknowledges them to the visitor.
#[derive(Clone)]
pub struct ContactNotifier {
    mailer: Arc<dyn Mailer>,
    admin_address: String,
}

impl ContactNotifier {
    pub fn new(mailer: Arc<dyn Mailer>, admin_address: impl Into<String>) -> Self {
        Self {
            mailer,
            admin_address: admin_address.into(),
        }
    }

    pub fn staff_email(
        &self,
        submission: &ContactSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<OutgoingEmail, NotificationError> {
        use askama::Template;

        let inquiry = Inquiry::new(submission, submitted_at);

        Ok(OutgoingEmail {
            to: self.admin_address.to_owned(),
            subject: staff_subject(submission),
            html: StaffHtmlTemplate { inquiry: &inquiry }.render()?,
            plain: StaffPlainTemplate { inquiry: &inquiry }.render()?,
        })
    }

    pub fn acknowledgement_email(
        &self,
        submission: &ContactSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<OutgoingEmail, NotificationError> {
        use askama::Template;

        let inquiry = Inquiry::new(submission, submitted_at);

        Ok(OutgoingEmail {
            to: submission.email.to_owned(),
            subject: ACKNOWLEDGEMENT_SUBJECT.to_owned(),
            html: AcknowledgementHtmlTemplate { inquiry: &inquiry }.render()?,
            plain: AcknowledgementPlainTemplate { inquiry: &inquiry }.render()?,
        })
    }

    /// Sends the staff notification, then the acknowledgement. Stops at the
    /// first failure; nothing is retried.
    #[tracing::instrument(
        skip_all,
        fields(service = ?submission.service_type, property = ?submission.property_name)
    )]
    pub async fn notify(
        &self,
        submission: &ContactSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), NotificationError> {
        let staff = self.staff_email(submission, submitted_at)?;
        let acknowledgement = self.acknowledgement_email(submission, submitted_at)?;

        self.mailer.send(staff).await?;
        tracing::info!("Staff notification dispatched");

        self.mailer.send(acknowledgement).await?;
        tracing::info!("Acknowledgement dispatched");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};
    use cohousy_contact::PreferredDate;

    use super::*;

    #[derive(Default)]
    struct FlakyMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail_at: Option<usize>,
    }

    #[async_trait]
    impl Mailer for FlakyMailer {
        async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
            let mut sent = self.sent.lock().unwrap();
            if self.fail_at == Some(sent.len()) {
                return Err(NotificationError::Address(
                    "relay@".parse::<lettre::Address>().unwrap_err(),
                ));
            }
            sent.push(email);
            Ok(())
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: "9000000000".to_owned(),
            message: Some("Two rooms please\nwith parking".to_owned()),
            service_type: Some("Co-living".to_owned()),
            preferred_date: Some(PreferredDate::new(
                NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            )),
            property_name: None,
        }
    }

    fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 0).unwrap()
    }

    #[test]
    fn test_staff_subject_suffixes() {
        let mut s = submission();
        assert_eq!(staff_subject(&s), "New Contact Form Submission - Co-living");

        s.property_name = Some("Skyline Residency".to_owned());
        assert_eq!(
            staff_subject(&s),
            "New Contact Form Submission - Co-living - Skyline Residency"
        );

        s.service_type = None;
        s.property_name = None;
        assert_eq!(staff_subject(&s), "New Contact Form Submission");
    }

    #[test]
    fn test_staff_email_lists_every_field() {
        let notifier = ContactNotifier::new(Arc::new(FlakyMailer::default()), "staff@example.com");
        let email = notifier.staff_email(&submission(), submitted_at()).unwrap();

        assert_eq!(email.to, "staff@example.com");
        for needle in [
            "Asha",
            "mailto:asha@example.com",
            "tel:9000000000",
            "Co-living",
            "2 November 2026",
            "Two rooms please<br>with parking",
            "Submitted on 19 October 2026, 08:05:00 UTC",
        ] {
            assert!(email.html.contains(needle), "html is missing {needle}");
        }
        assert!(!email.html.contains("Property Inquiry"));
        assert!(email.plain.contains("Phone: 9000000000"));
    }

    #[test]
    fn test_markup_in_fields_is_escaped() {
        let mut s = submission();
        s.name = "<script>alert(1)</script>".to_owned();

        let notifier = ContactNotifier::new(Arc::new(FlakyMailer::default()), "staff@example.com");
        let email = notifier.staff_email(&s, submitted_at()).unwrap();

        assert!(!email.html.contains("<script>"));
        assert!(email.plain.contains("<script>"));
    }

    #[test]
    fn test_acknowledgement_goes_to_visitor() {
        let notifier = ContactNotifier::new(Arc::new(FlakyMailer::default()), "staff@example.com");
        let email = notifier
            .acknowledgement_email(&submission(), submitted_at())
            .unwrap();

        assert_eq!(email.to, "asha@example.com");
        assert_eq!(email.subject, ACKNOWLEDGEMENT_SUBJECT);
        assert!(email.html.contains("Dear Asha"));
        assert!(email.html.contains("Your Inquiry Details"));
        assert!(email.html.contains("2 November 2026"));
        assert!(!email.html.contains("Property:"));
    }

    #[tokio::test]
    async fn test_notify_sends_staff_first() {
        let mailer = Arc::new(FlakyMailer::default());
        let notifier = ContactNotifier::new(mailer.clone(), "staff@example.com");

        notifier.notify(&submission(), submitted_at()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        let recipients = sent.iter().map(|e| e.to.as_str()).collect::<Vec<_>>();
        assert_eq!(recipients, vec!["staff@example.com", "asha@example.com"]);
    }

    #[tokio::test]
    async fn test_staff_failure_skips_acknowledgement() {
        let mailer = Arc::new(FlakyMailer {
            fail_at: Some(0),
            ..Default::default()
        });
        let notifier = ContactNotifier::new(mailer.clone(), "staff@example.com");

        assert!(notifier.notify(&submission(), submitted_at()).await.is_err());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
