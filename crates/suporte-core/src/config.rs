//! Static configuration of the intake flow.
//!
//! Defaults are the production identifiers; a host may override any of them
//! from `config.toml` (see `suporte_infrastructure::ConfigService`).

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_COMPANY_NAME: &str = "WebSolutions";
pub const DEFAULT_HANDOFF_BASE_URL: &str = "https://wa.me/351933737672";
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SUPPORT_MAILBOX: &str = "suporte@websolutions.pt";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Brand shown in the message header
    pub company_name: String,
    /// Deep link base, the composed text is appended as `?text=`
    pub handoff_base_url: String,
    /// How long a successful submission stays on screen before the reset
    pub reset_delay_ms: u64,
    pub relay: RelayConfig,
    pub ticket: TicketConfig,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            handoff_base_url: DEFAULT_HANDOFF_BASE_URL.to_string(),
            reset_delay_ms: 3_000,
            relay: RelayConfig::default(),
            ticket: TicketConfig::default(),
        }
    }
}

impl IntakeConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// What to do when the relay fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayFailurePolicy {
    /// Abort the submission, no handoff (applies even without attachments)
    #[default]
    FailClosed,
    /// Proceed to the handoff when there was nothing but text to relay
    TolerateWithoutAttachments,
}

/// E-mail relay settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Public key of the e-mail service account. Never logged.
    pub public_key: String,
    /// Support team mailbox
    pub destination: String,
    pub timeout_secs: u64,
    pub failure_policy: RelayFailurePolicy,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: "service_websolutions".to_string(),
            template_id: "template_suporte".to_string(),
            public_key: String::new(),
            destination: DEFAULT_SUPPORT_MAILBOX.to_string(),
            timeout_secs: 30,
            failure_policy: RelayFailurePolicy::default(),
        }
    }
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Ticket id format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    pub prefix: String,
    /// Number of random characters after the prefix
    pub length: usize,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            prefix: "TKT-".to_string(),
            length: 8,
        }
    }
}
