//! Error types for the support intake domain.

use crate::intake::{IssueCategory, TextField};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notice shown when the relay fails, whatever the underlying cause.
pub const RELAY_FAILURE_NOTICE: &str =
    "Não foi possível enviar a sua solicitação. Verifique a sua ligação e tente novamente.";

/// A local, synchronous rejection raised while validating a submission.
///
/// Validation only runs when the user submits, never on step navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// A required text field is empty after trimming whitespace
    #[error("Missing required field: {0}")]
    MissingRequiredField(TextField),

    /// No issue category was selected
    #[error("No issue type selected")]
    NoIssueTypeSelected,

    /// The contact e-mail has no local part or no domain part
    #[error("Invalid contact e-mail")]
    InvalidContactEmail,
}

impl ValidationError {
    /// Human-readable message for the person filling in the form.
    pub fn user_notice(&self) -> String {
        match self {
            Self::MissingRequiredField(TextField::OtherIssueDescription) => {
                "Por favor, detalhe o problema \"Outros\"".to_string()
            }
            Self::MissingRequiredField(field) => {
                format!("Por favor, preencha o campo \"{}\"", field.label())
            }
            Self::NoIssueTypeSelected => {
                "Por favor, selecione pelo menos um tipo de problema".to_string()
            }
            Self::InvalidContactEmail => {
                "Por favor, indique um e-mail de contacto válido".to_string()
            }
        }
    }
}

/// Failure reported by the outbound message relay.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayError {
    /// The request never produced a response (network, DNS, timeout)
    #[error("Relay transport error: {message}")]
    Transport { message: String, retryable: bool },

    /// The relay answered with a non-success status
    #[error("Relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The payload could not be encoded for the relay
    #[error("Relay payload encoding error: {0}")]
    Encoding(String),
}

impl RelayError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>, retryable: bool) -> Self {
        Self::Transport {
            message: message.into(),
            retryable,
        }
    }

    /// Whether trying again later could succeed.
    ///
    /// No automatic retry is ever performed; this only informs the notice
    /// and the logs.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { retryable, .. } => *retryable,
            Self::Rejected { status, .. } => *status >= 500 || *status == 429,
            Self::Encoding(_) => false,
        }
    }
}

/// Failure decoding one selected file into a transportable attachment.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeError {
    /// The file could not be read
    #[error("Failed to read file: {message}")]
    Io { message: String },

    /// The file is not an image
    #[error("Unsupported media type: {mime_type}")]
    UnsupportedMediaType { mime_type: String },

    /// The file has no content
    #[error("File is empty")]
    Empty,
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// The shared error type for the intake crates.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportError {
    /// Submission rejected by local validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The relay failed; form data is preserved for a retry
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// A submission is already in flight or has just succeeded
    #[error("Submission already in progress for ticket '{ticket_id}'")]
    SubmissionInProgress { ticket_id: String },

    /// Attachments were offered while the image-change category is not selected
    #[error("Attachments are only accepted for '{}'", IssueCategory::ImageChange)]
    AttachmentsNotAccepted,

    /// No form field has this name
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// The value kind does not match the field (text vs. checkbox)
    #[error("Invalid value for form field '{field}'")]
    InvalidFieldValue { field: String },

    /// The label is not part of the issue catalog
    #[error("Unknown issue category: {0}")]
    UnknownIssueCategory(String),

    /// Wizard step outside 1..=3
    #[error("Invalid wizard step: {0}")]
    InvalidStep(u8),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SupportError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a relay error
    pub fn is_relay(&self) -> bool {
        matches!(self, Self::Relay(_))
    }

    /// Single human-readable notice for the person filling in the form.
    pub fn user_notice(&self) -> String {
        match self {
            Self::Validation(err) => err.user_notice(),
            Self::Relay(_) => RELAY_FAILURE_NOTICE.to_string(),
            Self::SubmissionInProgress { .. } => {
                "A sua solicitação já está a ser enviada.".to_string()
            }
            Self::AttachmentsNotAccepted => format!(
                "Só é possível anexar imagens ao selecionar \"{}\".",
                IssueCategory::ImageChange
            ),
            _ => "Ocorreu um erro inesperado. Tente novamente.".to_string(),
        }
    }
}

impl From<std::io::Error> for SupportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for SupportError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("TOML - {}", err))
    }
}

/// A type alias for `Result<T, SupportError>`.
pub type Result<T> = std::result::Result<T, SupportError>;
