//! Error types for the ledger and dispatcher.

use quickchat_core::{CoreError, ValidationError};
use quickchat_store::StoreError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Raw fields could not be turned into a record.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] CoreError),

    /// No record matched the given key.
    #[error("not found: {0}")]
    NotFound(String),

    /// The persistence collaborator failed to read, parse, or write.
    #[error("persistence failure: {0}")]
    PersistenceFailure(#[from] StoreError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Reasons a message cannot be marked as sent.
///
/// The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("Failed to send message: Message content cannot be empty")]
    EmptyPayload,

    #[error("Failed to send message: Payload too long")]
    PayloadTooLong,

    #[error("Failed to send message: Invalid recipient")]
    InvalidRecipient,

    /// A record reached dispatch without an id usable for fingerprinting.
    #[error("Failed to send message: System error, message hash could not be generated")]
    FingerprintUnavailable,
}

impl From<ValidationError> for SendError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::EmptyPayload => SendError::EmptyPayload,
            ValidationError::PayloadTooLong { .. } => SendError::PayloadTooLong,
            ValidationError::InvalidRecipient => SendError::InvalidRecipient,
        }
    }
}
