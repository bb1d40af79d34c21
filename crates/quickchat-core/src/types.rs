//! Strong type definitions for QuickChat.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Number of digits in a generated message id.
pub const ID_DIGITS: usize = 10;

const ID_SPACE: u64 = 10_000_000_000;

/// A message identifier.
///
/// Generated ids are ten decimal digits with leading zeros. Ids supplied from
/// outside (e.g. restored from storage) are kept verbatim and only checked
/// when [`MessageId::is_valid_format`] is called.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Wrap an externally supplied id without checking it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh ten-digit id from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a ten-digit id from the given RNG.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let n = rng.gen_range(0..ID_SPACE);
        Self(format!("{:010}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff the id is exactly ten ASCII digits.
    pub fn is_valid_format(&self) -> bool {
        validate_id_format(&self.0)
    }

    /// The first two characters, or `None` when the id is shorter.
    pub fn prefix(&self) -> Option<&str> {
        crate::fingerprint::id_prefix(&self.0)
    }
}

impl fmt::Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageId({})", self.0)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// True iff `id` is exactly ten decimal digits.
///
/// Used as an integrity check only; it never blocks record construction.
pub fn validate_id_format(id: &str) -> bool {
    id.len() == ID_DIGITS && id.bytes().all(|b| b.is_ascii_digit())
}

/// Delivery/storage status of a message.
///
/// Transitions are caller-driven; any status may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStatus {
    #[default]
    New,
    Sent,
    Stored,
    Disregarded,
}

impl MessageStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "New",
            MessageStatus::Sent => "Sent",
            MessageStatus::Stored => "Stored",
            MessageStatus::Disregarded => "Disregarded",
        }
    }

    /// Whether recipient searches include messages with this status.
    pub fn is_visible_to_recipient(&self) -> bool {
        matches!(self, MessageStatus::Sent | MessageStatus::Stored)
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(MessageStatus::New),
            "Sent" => Ok(MessageStatus::Sent),
            "Stored" => Ok(MessageStatus::Stored),
            "Disregarded" => Ok(MessageStatus::Disregarded),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}
