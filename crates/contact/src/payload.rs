use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use validator::Validate;

use crate::PreferredDate;

/// JSON body posted by the contact form.
///
/// Every key is optional on the wire; [`ContactPayload::validate_submission`]
/// decides whether the body is usable.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::preferred_date::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_date: Option<PreferredDate>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
}

impl ContactPayload {
    /// Decodes a request body.
    ///
    /// Fields are only read from a JSON object. Any other non-null document
    /// carries no fields and yields an empty payload; `null` is an error.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            value @ (Value::Object(_) | Value::Null) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

/// Free-text field sent by browsers that do not always send strings.
///
/// `null`, `false`, `0` and `""` count as not sent. Other scalars keep their
/// JSON spelling. Objects and arrays are rejected.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(true) => Ok(Some("true".to_owned())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("expected text, found {other}"))),
    }
}
