//! Contact form submissions

use chrono::Utc;
use shared::{ContactMessage, ContactReceipt};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;

/// Contact service; messages are logged, not stored
#[derive(Clone, Default)]
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and acknowledge a contact message
    pub fn submit(&self, message: ContactMessage) -> AppResult<ContactReceipt> {
        message.validate()?;

        let reference = Uuid::new_v4();
        tracing::info!(
            %reference,
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            "Contact message received"
        );

        Ok(ContactReceipt {
            reference,
            received_at: Utc::now(),
            message: "Thank you for reaching out. We will get back to you soon.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Asha Patel".to_string(),
            email: "asha@example.com".to_string(),
            subject: "Monsoon forecasts".to_string(),
            message: "Do you cover Karnataka districts?".to_string(),
        }
    }

    #[test]
    fn test_submit_returns_receipt() {
        let receipt = ContactService::new().submit(message()).unwrap();
        assert!(!receipt.reference.is_nil());
        assert!(!receipt.message.is_empty());
    }

    #[test]
    fn test_submit_rejects_empty_subject() {
        let mut msg = message();
        msg.subject = String::new();
        match ContactService::new().submit(msg) {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "subject"),
            other => panic!("expected validation error, got {:?}", other.map(|r| r.reference)),
        }
    }
}
