use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the bytes of a selected file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A file on disk, read when decoded
    Path(PathBuf),
    /// Content already held in memory
    Bytes(Vec<u8>),
}

/// A file picked by the user, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name
    pub name: String,
    pub source: FileSource,
    /// MIME type declared by the picker, if any
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            source: FileSource::Path(path),
            mime_type: None,
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Bytes(bytes),
            mime_type: None,
        }
    }

    /// Declares the MIME type instead of guessing it from the name.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// A decoded image ready to be inlined into the relay payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    /// Size of the raw file content
    pub size_bytes: u64,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

/// A selected file that was dropped because it could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentWarning {
    /// Position of the file in the original selection
    pub index: usize,
    pub file_name: String,
    pub reason: DecodeError,
}

impl AttachmentWarning {
    pub fn user_notice(&self) -> String {
        format!(
            "Não foi possível anexar \"{}\": {}",
            self.file_name, self.reason
        )
    }
}
