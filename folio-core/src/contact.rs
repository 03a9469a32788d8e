//! Contact form intake.
//!
//! [`validate_contact`] is pure; [`submit_contact`] adds the CMS round trip.

use chrono::{DateTime, Utc};
use folio_model::{ContactDocument, ContactForm, ContactStatus};
use serde::Serialize;
use tracing::{error, info};

use crate::cms::CmsClient;
use crate::error::ContactError;

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub id: String,
}

fn field(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Turn raw form input into the document stored in the CMS.
///
/// `name`, `email` and `message` are required after trimming; a blank subject
/// is dropped.
pub fn validate_contact(
    form: &ContactForm,
    now: DateTime<Utc>,
) -> Result<ContactDocument, ContactError> {
    let name = field(&form.name);
    let email = field(&form.email);
    let message = field(&form.message);

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if email.is_none() {
        missing.push("email");
    }
    if message.is_none() {
        missing.push("message");
    }

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(ContactDocument {
            doc_type: ContactDocument::DOC_TYPE.to_string(),
            name,
            email,
            subject: field(&form.subject),
            message,
            submitted_at: now,
            status: ContactStatus::New,
        }),
        _ => Err(ContactError::MissingFields(missing)),
    }
}

/// Validate `form` and store it through `cms`.
pub async fn submit_contact<C>(
    cms: &C,
    form: &ContactForm,
) -> Result<ContactReceipt, ContactError>
where
    C: CmsClient + Send + Sync + ?Sized,
{
    let document = validate_contact(form, Utc::now())?;

    match cms.create_contact(&document).await {
        Ok(id) => {
            info!(%id, "contact submission stored");
            Ok(ContactReceipt { id })
        }
        Err(err) => {
            error!("Error submitting contact form: {err}");
            Err(ContactError::Cms(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::MockCmsClient;
    use crate::error::CmsError;
    use chrono::TimeZone;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let opt = |s: &str| Some(s.to_string());
        ContactForm {
            name: opt(name),
            email: opt(email),
            subject: opt(subject),
            message: opt(message),
        }
    }

    #[test]
    fn valid_form_becomes_new_contact_document() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let doc = validate_contact(
            &form(" Ada ", "ada@example.com", "Hiring", " Hello there "),
            now,
        )
        .unwrap();

        assert_eq!(doc.doc_type, "contact");
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.subject.as_deref(), Some("Hiring"));
        assert_eq!(doc.message, "Hello there");
        assert_eq!(doc.submitted_at, now);
        assert_eq!(doc.status, ContactStatus::New);
    }

    #[test]
    fn blank_subject_is_dropped() {
        let doc =
            validate_contact(&form("Ada", "a@b.c", "   ", "Hi"), Utc::now())
                .unwrap();
        assert!(doc.subject.is_none());
    }

    #[test]
    fn missing_fields_are_listed() {
        let err = validate_contact(&form("", "a@b.c", "", "  "), Utc::now())
            .unwrap_err();

        match &err {
            ContactError::MissingFields(fields) => {
                assert_eq!(fields, &["name", "message"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message(), "Please fill in all required fields");
    }

    #[test]
    fn empty_form_is_rejected() {
        let err =
            validate_contact(&ContactForm::default(), Utc::now()).unwrap_err();
        assert!(matches!(err, ContactError::MissingFields(ref f) if f.len() == 3));
    }

    #[tokio::test]
    async fn submit_returns_created_id() {
        let mut cms = MockCmsClient::new();
        cms.expect_create_contact()
            .withf(|doc| doc.name == "Ada" && doc.status == ContactStatus::New)
            .times(1)
            .returning(|_| Ok("contact.abc".to_string()));

        let receipt = submit_contact(&cms, &form("Ada", "a@b.c", "", "Hi"))
            .await
            .unwrap();
        assert_eq!(receipt.id, "contact.abc");
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_cms() {
        let mut cms = MockCmsClient::new();
        cms.expect_create_contact().never();

        let err = submit_contact(&cms, &form("Ada", "", "", "Hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::MissingFields(_)));
    }

    #[tokio::test]
    async fn cms_failure_maps_to_generic_message() {
        let mut cms = MockCmsClient::new();
        cms.expect_create_contact()
            .returning(|_| Err(CmsError::MissingToken));

        let err = submit_contact(&cms, &form("Ada", "a@b.c", "", "Hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Cms(CmsError::MissingToken)));
        assert_eq!(
            err.user_message(),
            "Failed to submit the form. Please try again later."
        );
    }
}
