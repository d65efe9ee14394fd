use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ContactError;

/// Raw body of `POST /api/contact`. Every field is optional so a partial form still parses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub website: Option<String>,
}

/// Strings pass through, numbers and booleans are written out as text, and
/// anything else counts as absent. One odd field never discards the others.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub ok: bool,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ContactRequest {
    /// Unparseable bodies become an empty request, which then fails validation.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::debug!("Contact body is not a valid payload, treating as empty: {}", e);
            Self::default()
        })
    }

    pub fn honeypot_filled(&self) -> bool {
        self.website.as_deref().map_or(false, |w| !w.trim().is_empty())
    }

    pub fn into_submission(self) -> Result<ContactSubmission, ContactError> {
        let (Some(name), Some(email), Some(message)) =
            (present(self.name), present(self.email), present(self.message))
        else {
            return Err(ContactError::Validation);
        };

        Ok(ContactSubmission {
            name,
            email,
            phone: present(self.phone),
            subject: present(self.subject),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_is_empty_request() {
        let request = ContactRequest::from_body(b"{not json");
        assert!(request.name.is_none());
        assert!(matches!(
            request.into_submission(),
            Err(ContactError::Validation)
        ));
    }

    #[test]
    fn non_object_body_is_empty_request() {
        let request = ContactRequest::from_body(br#"["Ana", "a@b.com"]"#);
        assert!(request.email.is_none());
    }

    #[test]
    fn scalar_fields_are_read_as_text() {
        let submission = ContactRequest::from_body(
            br#"{"name":"Ana","email":"a@b.com","phone":21999990000,"subject":true,"message":"oi"}"#,
        )
        .into_submission()
        .unwrap();

        assert_eq!(submission.phone.as_deref(), Some("21999990000"));
        assert_eq!(submission.subject.as_deref(), Some("true"));
    }

    #[test]
    fn structured_fields_count_as_missing() {
        let request = ContactRequest::from_body(
            br#"{"name":"Ana","email":"a@b.com","phone":{"ddd":21},"message":null}"#,
        );
        assert_eq!(request.name.as_deref(), Some("Ana"));
        assert!(request.phone.is_none());
        assert!(matches!(
            request.into_submission(),
            Err(ContactError::Validation)
        ));
    }

    #[test]
    fn blank_required_fields_fail_validation() {
        for body in [
            r#"{"name":"","email":"a@b.com","message":"oi"}"#,
            r#"{"name":"Ana","email":"   ","message":"oi"}"#,
            r#"{"name":"Ana","email":"a@b.com"}"#,
        ] {
            let result = ContactRequest::from_body(body.as_bytes()).into_submission();
            assert!(matches!(result, Err(ContactError::Validation)), "{}", body);
        }
    }

    #[test]
    fn optional_fields_drop_when_blank() {
        let submission = ContactRequest::from_body(
            r#"{"name":"Ana","email":"ana@obra.com.br","phone":"","subject":"Orçamento","message":"Olá"}"#
                .as_bytes(),
        )
        .into_submission()
        .unwrap();

        assert_eq!(submission.phone, None);
        assert_eq!(submission.subject.as_deref(), Some("Orçamento"));
    }

    #[test]
    fn honeypot_detects_filled_website() {
        assert!(ContactRequest::from_body(br#"{"website":"http://spam"}"#).honeypot_filled());
        assert!(!ContactRequest::from_body(br#"{"website":""}"#).honeypot_filled());
        assert!(!ContactRequest::from_body(b"{}").honeypot_filled());
    }
}
