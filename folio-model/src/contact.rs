use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw contact form fields as posted by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContactStatus {
    #[default]
    New,
    Archived,
}

/// The `contact` document written to the CMS for each accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContactDocument {
    #[cfg_attr(feature = "serde", serde(rename = "_type"))]
    pub doc_type: String,
    pub name: String,
    pub email: String,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", default)
    )]
    pub subject: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ContactStatus,
}

impl ContactDocument {
    pub const DOC_TYPE: &'static str = "contact";
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_studio_field_names() {
        let doc = ContactDocument {
            doc_type: ContactDocument::DOC_TYPE.to_string(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: None,
            message: "Hello".into(),
            submitted_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            status: ContactStatus::New,
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["_type"], "contact");
        assert_eq!(value["status"], "new");
        assert_eq!(value["submittedAt"], "2025-03-01T12:00:00Z");
        assert!(value.get("subject").is_none());
    }
}
