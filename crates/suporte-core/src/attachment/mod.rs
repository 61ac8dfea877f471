//! Image attachments.
//!
//! - `model`: selected files and their decoded, transportable form
//! - `decoder`: the decoding collaborator trait

mod decoder;
mod model;

pub use decoder::AttachmentDecoder;
pub use model::{Attachment, AttachmentWarning, FileSource, SelectedFile};
