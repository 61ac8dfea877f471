//! Handoff message composition.
//!
//! - `compose`: the formatted text summary of a session
//! - `encoding`: `encodeURIComponent`-compatible percent-encoding and the deep link

mod compose;
mod encoding;

pub use compose::{NO_ANSWER, YES_ANSWER, compose_message};
pub use encoding::{encode_uri_component, handoff_uri};
