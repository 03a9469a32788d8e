use thiserror::Error;

/// Failures talking to the content backend.
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Invalid CMS endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("CMS request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CMS responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("CMS response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("CMS writes require an API token")]
    MissingToken,

    #[error("CMS did not return an id for the created {0} document")]
    MissingDocumentId(&'static str),
}

/// Failures while accepting a contact form submission.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Missing required contact fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Failed to store contact submission: {0}")]
    Cms(#[from] CmsError),
}

impl ContactError {
    /// Message safe to show to the visitor.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::MissingFields(_) => {
                "Please fill in all required fields"
            }
            ContactError::Cms(_) => {
                "Failed to submit the form. Please try again later."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CmsError>;
