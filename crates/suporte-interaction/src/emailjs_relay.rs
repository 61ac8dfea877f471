//! EmailJsRelay - REST implementation of the message relay.
//!
//! Sends the support request and its inlined images to an EmailJS-style
//! `email/send` endpoint. One attempt per call, bounded by the configured
//! timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use suporte_core::config::RelayConfig;
use suporte_core::error::RelayError;
use suporte_core::ports::{MessageRelay, RelayPayload};
use tracing::{debug, info, warn};

/// Relay implementation that posts to the e-mail sending API.
#[derive(Clone)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    ticket_id: &'a str,
    restaurant_name: &'a str,
    contact_email: &'a str,
    reply_to: &'a str,
    message: &'a str,
    attachment_count: usize,
    attachments: Vec<AttachmentParam<'a>>,
    submitted_at: String,
}

#[derive(Debug, Serialize)]
struct AttachmentParam<'a> {
    name: &'a str,
    mime_type: &'a str,
    data: &'a str,
}

impl EmailJsRelay {
    /// Creates a relay with the provided endpoint and account identifiers.
    pub fn new(
        endpoint: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.service_id.clone(),
            config.template_id.clone(),
            config.public_key.clone(),
        )
        .with_timeout(config.timeout())
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request<'a>(&'a self, payload: &'a RelayPayload) -> SendEmailRequest<'a> {
        SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                to_email: &payload.destination,
                ticket_id: &payload.ticket_id,
                restaurant_name: &payload.restaurant_name,
                contact_email: &payload.contact_email,
                reply_to: &payload.contact_email,
                message: &payload.context,
                attachment_count: payload.attachments.len(),
                attachments: payload
                    .attachments
                    .iter()
                    .map(|a| AttachmentParam {
                        name: &a.file_name,
                        mime_type: &a.mime_type,
                        data: &a.data_url,
                    })
                    .collect(),
                submitted_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }
}

#[async_trait]
impl MessageRelay for EmailJsRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        let body = serde_json::to_vec(&self.build_request(payload))
            .map_err(|err| RelayError::Encoding(err.to_string()))?;

        debug!(
            ticket_id = %payload.ticket_id,
            attachments = payload.attachments.len(),
            bytes = body.len(),
            "Sending support request to relay"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| {
                RelayError::transport(
                    format!("Relay request failed: {err}"),
                    err.is_connect() || err.is_timeout(),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!(
                ticket_id = %payload.ticket_id,
                status = status.as_u16(),
                "Relay rejected support request"
            );
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(ticket_id = %payload.ticket_id, "Relay accepted support request");
        Ok(())
    }
}
