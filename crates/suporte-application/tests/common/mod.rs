//! Mock collaborators shared by the intake session tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use suporte_application::{IntakeDependencies, IntakeSession};
use suporte_core::attachment::{Attachment, AttachmentDecoder, FileSource, SelectedFile};
use suporte_core::config::IntakeConfig;
use suporte_core::error::{DecodeError, RelayError};
use suporte_core::intake::{IssueCategory, TextField};
use suporte_core::ports::{HandoffChannel, MessageRelay, RelayPayload, TicketIdGenerator};
use tokio::sync::Notify;

/// Hands out TKT-TEST0001, TKT-TEST0002, ...
#[derive(Default)]
pub struct SequentialTicketIds {
    counter: AtomicUsize,
}

impl TicketIdGenerator for SequentialTicketIds {
    fn next_ticket_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("TKT-TEST{:04}", n)
    }
}

pub struct BlankTicketIds;

impl TicketIdGenerator for BlankTicketIds {
    fn next_ticket_id(&self) -> String {
        String::new()
    }
}

/// Hands out one id, then only blank ones.
pub struct OneShotTicketIds {
    issued: AtomicUsize,
}

impl OneShotTicketIds {
    pub fn new() -> Self {
        Self {
            issued: AtomicUsize::new(0),
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

impl TicketIdGenerator for OneShotTicketIds {
    fn next_ticket_id(&self) -> String {
        match self.issued.fetch_add(1, Ordering::SeqCst) {
            0 => "TKT-ONE".to_string(),
            _ => String::new(),
        }
    }
}

/// Records every payload; answers with the configured outcome.
pub struct MockRelay {
    pub payloads: Mutex<Vec<RelayPayload>>,
    outcome: Mutex<Result<(), RelayError>>,
    gate: Option<Arc<Notify>>,
}

impl MockRelay {
    pub fn succeeding() -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            outcome: Mutex::new(Ok(())),
            gate: None,
        }
    }

    pub fn failing(err: RelayError) -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            outcome: Mutex::new(Err(err)),
            gate: None,
        }
    }

    /// Holds every send until the gate is notified.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            outcome: Mutex::new(Ok(())),
            gate: Some(gate),
        }
    }

    pub fn set_outcome(&self, outcome: Result<(), RelayError>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageRelay for MockRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        self.payloads.lock().unwrap().push(payload.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcome.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct MockHandoff {
    pub opened: Mutex<Vec<String>>,
}

impl MockHandoff {
    pub fn calls(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

impl HandoffChannel for MockHandoff {
    fn open(&self, uri: &str) {
        self.opened.lock().unwrap().push(uri.to_string());
    }
}

/// Decodes in-memory files after a per-name delay and records completion order.
#[derive(Default)]
pub struct DelayedDecoder {
    delays: HashMap<String, Duration>,
    pub started: AtomicUsize,
    pub completed: Mutex<Vec<String>>,
}

impl DelayedDecoder {
    pub fn with_delays(delays: &[(&str, u64)]) -> Self {
        Self {
            delays: delays
                .iter()
                .map(|(name, ms)| (name.to_string(), Duration::from_millis(*ms)))
                .collect(),
            started: AtomicUsize::new(0),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AttachmentDecoder for DelayedDecoder {
    async fn decode(&self, file: &SelectedFile) -> Result<Attachment, DecodeError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&file.name) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(file.name.clone());

        match &file.source {
            FileSource::Bytes(bytes) if !bytes.is_empty() => Ok(decoded(&file.name)),
            FileSource::Bytes(_) => Err(DecodeError::Empty),
            FileSource::Path(_) => Err(DecodeError::Io {
                message: "paths are not supported by the test decoder".to_string(),
            }),
        }
    }
}

pub fn decoded(name: &str) -> Attachment {
    Attachment {
        file_name: name.to_string(),
        mime_type: "image/png".to_string(),
        size_bytes: 3,
        data_url: format!("data:image/png;base64,{name}"),
    }
}

pub fn image(name: &str) -> SelectedFile {
    SelectedFile::from_bytes(name, b"png".to_vec())
}

pub struct Harness {
    pub session: Arc<IntakeSession>,
    pub relay: Arc<MockRelay>,
    pub handoff: Arc<MockHandoff>,
    pub decoder: Arc<DelayedDecoder>,
}

pub fn harness(relay: MockRelay) -> Harness {
    harness_with(IntakeConfig::default(), relay, DelayedDecoder::default())
}

pub fn harness_with(config: IntakeConfig, relay: MockRelay, decoder: DelayedDecoder) -> Harness {
    let relay = Arc::new(relay);
    let handoff = Arc::new(MockHandoff::default());
    let decoder = Arc::new(decoder);
    let deps = IntakeDependencies {
        ticket_ids: Arc::new(SequentialTicketIds::default()),
        relay: relay.clone(),
        handoff: handoff.clone(),
        decoder: decoder.clone(),
    };
    let session = Arc::new(IntakeSession::new(config, deps).expect("session should start"));
    Harness {
        session,
        relay,
        handoff,
        decoder,
    }
}

/// Fills every required field and selects one category.
pub async fn fill_valid_form(session: &IntakeSession) {
    session.set_field(TextField::RestaurantName, "Sabor Real").await;
    session.set_field(TextField::ResponsibleName, "Marta Silva").await;
    session.set_field(TextField::ContactEmail, "marta@saborreal.pt").await;
    session
        .set_field(TextField::ProblemDomain, "saborreal.websolutions.com")
        .await;
    session
        .set_field(TextField::ProblemDescription, "Os preços do menu não atualizam.")
        .await;
    session.toggle_issue_type(IssueCategory::PriceChange, true).await;
}
