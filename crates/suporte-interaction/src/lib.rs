//! Outbound adapters: the e-mail relay and the messaging handoff.

pub mod emailjs_relay;
pub mod handoff;

pub use emailjs_relay::EmailJsRelay;
pub use handoff::{LoggingHandoff, SystemHandoff};
