//! Contact form models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A message sent through the contact page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// Acknowledgement returned after a contact message is accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}
