//! Application layer for the support intake form.
//!
//! [`IntakeSession`] coordinates one live `FormSession` with its injected
//! collaborators: attachment decoding, the e-mail relay, and the messaging
//! handoff.

pub mod attachments;
pub mod intake_session;

pub use attachments::{DecodedBatch, decode_in_selection_order};
pub use intake_session::{IntakeDependencies, IntakeSession};
