//! HTTP handler for the contact form

use axum::{http::StatusCode, Json};
use shared::{ContactMessage, ContactReceipt};

use crate::error::AppResult;
use crate::services::ContactService;

/// Accept a contact form submission
pub async fn submit_contact(
    Json(message): Json<ContactMessage>,
) -> AppResult<(StatusCode, Json<ContactReceipt>)> {
    let receipt = ContactService::new().submit(message)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
