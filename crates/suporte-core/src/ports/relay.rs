use crate::attachment::Attachment;
use crate::error::RelayError;
use crate::intake::{FormSession, TextField};
use async_trait::async_trait;
use serde::Serialize;

/// Everything the relay needs to deliver one support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    /// Mailbox of the support team
    pub destination: String,
    pub ticket_id: String,
    pub restaurant_name: String,
    pub contact_email: String,
    /// Images in selection order
    pub attachments: Vec<Attachment>,
    /// The composed text summary
    pub context: String,
}

impl RelayPayload {
    /// Builds the payload from a session snapshot.
    pub fn from_session(
        session: &FormSession,
        destination: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            ticket_id: session.ticket_id().to_string(),
            restaurant_name: session.text(TextField::RestaurantName).to_string(),
            contact_email: session.text(TextField::ContactEmail).trim().to_string(),
            attachments: session.relayable_attachments().to_vec(),
            context: context.into(),
        }
    }
}

/// Best-effort outbound channel (e-mail) carrying the request and its images.
///
/// A single attempt is made per submission. Timeouts are the
/// implementation's concern.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Delivers the payload.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the relay accepted the message
    /// - `Err(RelayError)`: transport failure or rejection; no partial success
    async fn send(&self, payload: &RelayPayload) -> Result<(), RelayError>;
}
