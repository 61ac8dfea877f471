//! Submission state machine types.

use serde::{Deserialize, Serialize};

/// Where the form is in its submission lifecycle.
///
/// ```text
/// Idle ──submit──▶ Submitting ──relay ok──▶ Succeeded ──delay──▶ (new session, Idle)
///  ▲                   │
///  └──next action── Failed ◀──relay error──┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether a new submit may start from this state.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed)
    }
}

/// Returned to the host after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Ticket of the session that was submitted
    pub ticket_id: String,
    /// Deep link handed to the messaging application
    pub handoff_uri: String,
    /// Number of images delivered through the relay
    pub relayed_attachments: usize,
    /// False when the relay failed but the configured policy let the handoff proceed
    pub relay_delivered: bool,
}
