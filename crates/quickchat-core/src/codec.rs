//! Flat key/value shapes exchanged with persistence collaborators.
//!
//! Field names are fixed by the records already on disk and must not change.

use serde::{Deserialize, Serialize};

/// A persisted message, as read from or written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    #[serde(rename = "MESSAGE_ID")]
    pub id: String,
    #[serde(rename = "MESSAGE_SENDER")]
    pub sender: String,
    #[serde(rename = "MESSAGE_RECIPIENT")]
    pub recipient: String,
    #[serde(rename = "MESSAGE_PAYLOAD")]
    pub payload: String,
    #[serde(rename = "MESSAGE_STATUS")]
    pub status: String,
}

/// The sequence-indexed summary of a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentSummary {
    #[serde(rename = "MESSAGE_ID")]
    pub id: String,
    #[serde(rename = "MESSAGE_RECIPIENT")]
    pub recipient: String,
    #[serde(rename = "MESSAGE_PAYLOAD")]
    pub payload: String,
    #[serde(rename = "MESSAGE_INDEX")]
    pub index: u64,
    #[serde(rename = "MESSAGE_HASH")]
    pub hash: String,
}

impl SentSummary {
    /// Display block for the most-recently-sent query.
    pub fn render(&self) -> String {
        format!(
            "Message ID: {}\nMessage Hash: {}\nRecipient: {}\nMessage: {}\nMessage Number: {}",
            self.id, self.hash, self.recipient, self.payload, self.index
        )
    }
}
