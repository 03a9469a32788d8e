use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use folio_core::submit_contact;
use folio_model::ContactForm;
use serde::Serialize;

use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub id: String,
}

/// Accept a contact form submission
///
/// # Request
///
/// ```json
/// { "name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "..." }
/// ```
///
/// # Response
///
/// - `200 OK` with `{"success": true, "id": "..."}`
/// - `400 Bad Request` when the body is not a JSON form, or name, email or
///   message is blank
/// - `502 Bad Gateway` when the CMS rejects the write
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> AppResult<Json<ContactResponse>> {
    let Json(form) = payload?;
    let receipt = submit_contact(state.cms.as_ref(), &form).await?;
    Ok(Json(ContactResponse {
        success: true,
        id: receipt.id,
    }))
}
