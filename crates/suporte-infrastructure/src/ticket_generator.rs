//! Random ticket id generation.

use rand::Rng;
use suporte_core::config::TicketConfig;
use suporte_core::ports::TicketIdGenerator;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates `<prefix><N random uppercase alphanumerics>`, e.g. `TKT-7QX2M9AB`.
///
/// With the default 8 characters there are 36^8 (about 2.8e12) possible ids.
#[derive(Debug, Clone)]
pub struct RandomTicketGenerator {
    prefix: String,
    length: usize,
}

impl RandomTicketGenerator {
    pub fn new(prefix: impl Into<String>, length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            // a bare prefix would not identify anything
            length: length.max(1),
        }
    }

    pub fn from_config(config: &TicketConfig) -> Self {
        Self::new(config.prefix.clone(), config.length)
    }
}

impl Default for RandomTicketGenerator {
    fn default() -> Self {
        Self::from_config(&TicketConfig::default())
    }
}

impl TicketIdGenerator for RandomTicketGenerator {
    fn next_ticket_id(&self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..self.length)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}
