//! Collaborator interfaces consumed by the intake session.
//!
//! Implementations live in `suporte-infrastructure` and `suporte-interaction`
//! and are injected when the session is built.

mod handoff;
mod relay;
mod ticket;

pub use handoff::HandoffChannel;
pub use relay::{MessageRelay, RelayPayload};
pub use ticket::TicketIdGenerator;
