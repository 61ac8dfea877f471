//! The intake use case: one live form session and its submission pipeline.

use crate::attachments::decode_in_selection_order;
use std::sync::{Arc, Mutex};
use suporte_core::attachment::{Attachment, AttachmentDecoder, AttachmentWarning, SelectedFile};
use suporte_core::config::{IntakeConfig, RelayFailurePolicy};
use suporte_core::error::{Result, SupportError};
use suporte_core::intake::{
    FieldValue, FlagField, FormSession, IssueCategory, SubmissionReceipt, SubmissionState,
    TextField, WizardStep,
};
use suporte_core::message::{compose_message, handoff_uri};
use suporte_core::ports::{HandoffChannel, MessageRelay, RelayPayload, TicketIdGenerator};
use suporte_infrastructure::{ImageAttachmentDecoder, RandomTicketGenerator};
use suporte_interaction::{EmailJsRelay, SystemHandoff};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Ticket ids drawn before a reset falls back to the previous one.
const TICKET_ID_ATTEMPTS: usize = 3;

/// Collaborators injected into an [`IntakeSession`].
#[derive(Clone)]
pub struct IntakeDependencies {
    pub ticket_ids: Arc<dyn TicketIdGenerator>,
    pub relay: Arc<dyn MessageRelay>,
    pub handoff: Arc<dyn HandoffChannel>,
    pub decoder: Arc<dyn AttachmentDecoder>,
}

impl IntakeDependencies {
    /// Production adapters built from configuration.
    pub fn from_config(config: &IntakeConfig) -> Self {
        Self {
            ticket_ids: Arc::new(RandomTicketGenerator::from_config(&config.ticket)),
            relay: Arc::new(EmailJsRelay::from_config(&config.relay)),
            handoff: Arc::new(SystemHandoff::new()),
            decoder: Arc::new(ImageAttachmentDecoder::new()),
        }
    }
}

/// Holds the single live [`FormSession`] of one form instance.
///
/// Field edits stay possible while a submission awaits the relay; only a
/// second submit is refused. After a successful submission the session is
/// replaced by a fresh one once `reset_delay` has elapsed.
pub struct IntakeSession {
    form: Arc<RwLock<FormSession>>,
    deps: IntakeDependencies,
    config: Arc<IntakeConfig>,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl IntakeSession {
    /// Creates the session with a freshly generated ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator yields a blank ticket id.
    pub fn new(config: IntakeConfig, deps: IntakeDependencies) -> Result<Self> {
        let form = FormSession::new(deps.ticket_ids.next_ticket_id())?;
        info!(ticket_id = %form.ticket_id(), "Support intake session started");

        Ok(Self {
            form: Arc::new(RwLock::new(form)),
            deps,
            config: Arc::new(config),
            reset_task: Mutex::new(None),
        })
    }

    /// Creates the session with the production adapters.
    pub fn with_config(config: IntakeConfig) -> Result<Self> {
        let deps = IntakeDependencies::from_config(&config);
        Self::new(config, deps)
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// A copy of the current form state.
    pub async fn snapshot(&self) -> FormSession {
        self.form.read().await.clone()
    }

    pub async fn ticket_id(&self) -> String {
        self.form.read().await.ticket_id().to_string()
    }

    pub async fn submission_state(&self) -> SubmissionState {
        self.form.read().await.submission_state()
    }

    // ============================================================================
    // Field mutation
    // ============================================================================

    pub async fn set_field(&self, field: TextField, value: impl Into<String>) {
        self.form.write().await.set_field(field, value);
    }

    pub async fn set_flag(&self, field: FlagField, value: bool) {
        self.form.write().await.set_flag(field, value);
    }

    pub async fn set_field_by_name(&self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        self.form.write().await.set_field_by_name(name, value)
    }

    pub async fn toggle_issue_type(&self, category: IssueCategory, included: bool) {
        self.form.write().await.toggle_issue_type(category, included);
    }

    pub async fn toggle_issue_type_label(&self, label: &str, included: bool) -> Result<()> {
        self.form.write().await.toggle_issue_type_label(label, included)
    }

    pub async fn remove_attachment(&self, index: usize) -> Option<Attachment> {
        self.form.write().await.remove_attachment(index)
    }

    pub async fn next_step(&self) -> WizardStep {
        self.form.write().await.next_step()
    }

    pub async fn previous_step(&self) -> WizardStep {
        self.form.write().await.previous_step()
    }

    pub async fn go_to_step(&self, number: u8) -> Result<WizardStep> {
        self.form.write().await.go_to_step(number)
    }

    /// Decodes the selected files and appends them in selection order.
    ///
    /// Files that fail to decode are dropped and reported as warnings; the
    /// others are still added.
    ///
    /// # Errors
    ///
    /// Returns `AttachmentsNotAccepted` unless the image-change category is
    /// selected, both before decoding and when the results are stored.
    pub async fn add_attachments(
        &self,
        files: Vec<SelectedFile>,
    ) -> Result<Vec<AttachmentWarning>> {
        let ticket_id = {
            let form = self.form.read().await;
            if !form.accepts_attachments() {
                return Err(SupportError::AttachmentsNotAccepted);
            }
            form.ticket_id().to_string()
        };

        let batch = decode_in_selection_order(self.deps.decoder.as_ref(), &files).await;

        let mut form = self.form.write().await;
        if form.ticket_id() != ticket_id {
            debug!(
                ticket_id = %ticket_id,
                "Session was reset while decoding; discarding attachments"
            );
            return Ok(batch.warnings);
        }
        let added = batch.attachments.len();
        form.push_attachments(batch.attachments)?;
        debug!(
            ticket_id = %ticket_id,
            added,
            dropped = batch.warnings.len(),
            "Attachments added"
        );

        Ok(batch.warnings)
    }

    // ============================================================================
    // Submission pipeline
    // ============================================================================

    /// Validates, relays, and hands off the current request.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress`: another submit is in flight or just succeeded
    /// - `Validation`: nothing was sent, state unchanged
    /// - `Relay`: state is `Failed`, every field kept for a retry
    pub async fn submit(&self) -> Result<SubmissionReceipt> {
        let (ticket_id, message, payload) = {
            let mut form = self.form.write().await;
            if let Err(err) = form.begin_submission() {
                info!(ticket_id = %form.ticket_id(), error = %err, "Submission refused");
                return Err(err);
            }
            let message = compose_message(&form, &self.config.company_name);
            let payload = RelayPayload::from_session(
                &form,
                self.config.relay.destination.clone(),
                message.clone(),
            );
            (form.ticket_id().to_string(), message, payload)
        };

        info!(
            ticket_id = %ticket_id,
            attachments = payload.attachments.len(),
            "Submitting support request"
        );

        let relay_delivered = match self.deps.relay.send(&payload).await {
            Ok(()) => true,
            Err(err) if self.tolerates_relay_failure(&payload) => {
                warn!(
                    ticket_id = %ticket_id,
                    error = %err,
                    "Relay failed; continuing to handoff without attachments"
                );
                false
            }
            Err(err) => {
                self.form.write().await.fail_submission();
                warn!(
                    ticket_id = %ticket_id,
                    error = %err,
                    retryable = err.is_retryable(),
                    "Relay failed; submission aborted"
                );
                return Err(SupportError::Relay(err));
            }
        };

        self.form.write().await.complete_submission();

        let handoff_uri = handoff_uri(&self.config.handoff_base_url, &message);
        self.deps.handoff.open(&handoff_uri);
        info!(ticket_id = %ticket_id, "Support request handed off");

        self.schedule_reset(ticket_id.clone());

        Ok(SubmissionReceipt {
            ticket_id,
            handoff_uri,
            relayed_attachments: if relay_delivered {
                payload.attachments.len()
            } else {
                0
            },
            relay_delivered,
        })
    }

    /// Waits for a pending post-success reset, if any.
    pub async fn wait_for_reset(&self) {
        let handle = match self.reset_task.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle
            && let Err(err) = handle.await
        {
            error!(error = %err, "Session reset task failed");
        }
    }

    fn tolerates_relay_failure(&self, payload: &RelayPayload) -> bool {
        self.config.relay.failure_policy == RelayFailurePolicy::TolerateWithoutAttachments
            && payload.attachments.is_empty()
    }

    fn schedule_reset(&self, ticket_id: String) {
        let form = Arc::clone(&self.form);
        let ticket_ids = Arc::clone(&self.deps.ticket_ids);
        let delay = self.config.reset_delay();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut form = form.write().await;
            if form.ticket_id() != ticket_id
                || form.submission_state() != SubmissionState::Succeeded
            {
                return;
            }
            let fresh = (0..TICKET_ID_ATTEMPTS)
                .find_map(|_| FormSession::new(ticket_ids.next_ticket_id()).ok());
            match fresh {
                Some(fresh) => {
                    info!(
                        previous_ticket_id = %ticket_id,
                        ticket_id = %fresh.ticket_id(),
                        "Support intake session reset"
                    );
                    *form = fresh;
                }
                None => {
                    error!(
                        ticket_id = %ticket_id,
                        attempts = TICKET_ID_ATTEMPTS,
                        "Could not generate a new ticket id; reusing the previous one"
                    );
                    form.reset_keeping_ticket();
                }
            }
        });

        match self.reset_task.lock() {
            Ok(mut slot) => *slot = Some(handle),
            Err(_) => warn!("Reset task slot poisoned; reset will still run"),
        }
    }
}

impl Drop for IntakeSession {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.reset_task.lock()
            && let Some(handle) = slot.take()
        {
            handle.abort();
        }
    }
}

