//! Decodes selected image files into base64 data URLs.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use std::path::Path;
use suporte_core::attachment::{Attachment, AttachmentDecoder, FileSource, SelectedFile};
use suporte_core::error::DecodeError;
use tracing::debug;

/// Reads files from disk or memory and inlines them as `data:` URLs.
///
/// Only `image/*` content is accepted. The MIME type comes from the picker
/// when declared, otherwise it is guessed from the file name.
#[derive(Debug, Clone, Default)]
pub struct ImageAttachmentDecoder;

impl ImageAttachmentDecoder {
    pub fn new() -> Self {
        Self
    }

    fn resolve_mime_type(file: &SelectedFile) -> String {
        if let Some(declared) = file.mime_type.as_deref().filter(|m| !m.trim().is_empty()) {
            return declared.trim().to_ascii_lowercase();
        }

        let guess_from = match &file.source {
            FileSource::Path(path) => path.as_path(),
            FileSource::Bytes(_) => Path::new(&file.name),
        };
        mime_guess::from_path(guess_from)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

#[async_trait]
impl AttachmentDecoder for ImageAttachmentDecoder {
    async fn decode(&self, file: &SelectedFile) -> Result<Attachment, DecodeError> {
        let mime_type = Self::resolve_mime_type(file);
        if !mime_type.starts_with("image/") {
            return Err(DecodeError::UnsupportedMediaType { mime_type });
        }

        let bytes = match &file.source {
            FileSource::Path(path) => tokio::fs::read(path).await?,
            FileSource::Bytes(bytes) => bytes.clone(),
        };
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let data = BASE64_STANDARD.encode(&bytes);
        debug!(file_name = %file.name, %mime_type, size = bytes.len(), "Attachment decoded");

        Ok(Attachment {
            file_name: file.name.clone(),
            data_url: format!("data:{};base64,{}", mime_type, data),
            mime_type,
            size_bytes: bytes.len() as u64,
        })
    }
}
