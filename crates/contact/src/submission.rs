use std::fmt;

use validator::Validate;

use crate::{ContactPayload, PreferredDate};

/// Mandatory wire fields, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "phone"];

/// A submission that passed validation. Lives for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub service_type: Option<String>,
    pub preferred_date: Option<PreferredDate>,
    pub property_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    MissingRequiredFields(Vec<&'static str>),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::MissingRequiredFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(ContactSubmission),
    Invalid(InvalidReason),
}

impl ContactPayload {
    /// Checks the three mandatory fields and nothing else: no address or
    /// phone format checks, no length limits.
    pub fn validate_submission(self) -> Validation {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let missing = REQUIRED_FIELDS
                .into_iter()
                .filter(|field| field_errors.contains_key(*field))
                .collect::<Vec<_>>();

            return Validation::Invalid(InvalidReason::MissingRequiredFields(missing));
        }

        let (Some(name), Some(email), Some(phone)) = (self.name, self.email, self.phone) else {
            return Validation::Invalid(InvalidReason::MissingRequiredFields(
                REQUIRED_FIELDS.to_vec(),
            ));
        };

        Validation::Valid(ContactSubmission {
            name,
            email,
            phone,
            message: non_empty(self.message),
            service_type: non_empty(self.service_type),
            preferred_date: self.preferred_date,
            property_name: non_empty(self.property_name),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, phone: &str) -> ContactPayload {
        ContactPayload {
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
            phone: Some(phone.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_the_three_mandatory_fields() {
        let Validation::Valid(submission) =
            payload("Asha", "asha@example.com", "9000000000").validate_submission()
        else {
            panic!("expected a valid submission");
        };

        assert_eq!(submission.name, "Asha");
        assert_eq!(submission.email, "asha@example.com");
        assert_eq!(submission.phone, "9000000000");
        assert_eq!(submission.message, None);
    }

    #[test]
    fn test_empty_name_is_missing() {
        assert_eq!(
            payload("", "x@example.com", "900").validate_submission(),
            Validation::Invalid(InvalidReason::MissingRequiredFields(vec!["name"]))
        );
    }

    #[test]
    fn test_reports_every_missing_field_in_order() {
        let validation = ContactPayload {
            email: Some("x@example.com".to_owned()),
            ..Default::default()
        }
        .validate_submission();

        assert_eq!(
            validation,
            Validation::Invalid(InvalidReason::MissingRequiredFields(vec!["name", "phone"]))
        );
    }

    #[test]
    fn test_no_format_checks() {
        let validation = payload(" ", "not-an-email", "call me").validate_submission();
        assert!(matches!(validation, Validation::Valid(_)));
    }

    #[test]
    fn test_empty_optionals_become_absent() {
        let mut input = payload("Asha", "asha@example.com", "9000000000");
        input.message = Some(String::new());
        input.property_name = Some(String::new());
        input.service_type = Some("Co-living".to_owned());

        let Validation::Valid(submission) = input.validate_submission() else {
            panic!("expected a valid submission");
        };

        assert_eq!(submission.message, None);
        assert_eq!(submission.property_name, None);
        assert_eq!(submission.service_type.as_deref(), Some("Co-living"));
    }

    #[test]
    fn test_reason_mentions_fields() {
        let reason = InvalidReason::MissingRequiredFields(vec!["email", "phone"]);
        assert_eq!(reason.to_string(), "missing required fields: email, phone");
    }
}
