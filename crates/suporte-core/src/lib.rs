//! Domain layer for the WebSolutions support intake form.
//!
//! A single [`intake::FormSession`] holds one support request while it is
//! filled in; the [`ports`] traits describe the collaborators that deliver
//! it.

pub mod attachment;
pub mod config;
pub mod error;
pub mod intake;
pub mod message;
pub mod ports;

// Re-export common error type
pub use error::{Result, SupportError};
