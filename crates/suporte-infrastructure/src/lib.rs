//! Local adapters for the intake domain.

pub mod attachment_decoder;
pub mod config_service;
pub mod logging;
pub mod paths;
pub mod ticket_generator;

pub use crate::attachment_decoder::ImageAttachmentDecoder;
pub use crate::config_service::ConfigService;
pub use crate::ticket_generator::RandomTicketGenerator;
