use super::model::{Attachment, SelectedFile};
use crate::error::DecodeError;
use async_trait::async_trait;

/// Turns a selected file into a transportable attachment.
///
/// Several decodes may be in flight at once and may finish in any order;
/// callers are responsible for placing results by selection index.
#[async_trait]
pub trait AttachmentDecoder: Send + Sync {
    /// Reads and encodes one file.
    ///
    /// # Returns
    ///
    /// - `Ok(Attachment)`: the file as a base64 data URL
    /// - `Err(DecodeError)`: this file only could not be used
    async fn decode(&self, file: &SelectedFile) -> Result<Attachment, DecodeError>;
}
