//! Error types for QuickChat Core.

use thiserror::Error;

/// Core errors raised when turning raw fields into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown message status: {0:?}")]
    UnknownStatus(String),

    #[error("message id is empty")]
    EmptyId,
}

/// Validation failures for message content.
///
/// The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message content cannot be empty")]
    EmptyPayload,

    #[error("Message exceeds {limit} characters by {excess}, please reduce size.")]
    PayloadTooLong { limit: usize, excess: i64 },

    #[error(
        "Cell phone number is incorrectly formatted or does not contain an international code. Please correct the number and try again."
    )]
    InvalidRecipient,
}
