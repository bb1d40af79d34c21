//! Record: one message's identity, content, status, and fingerprint.
//!
//! Identity fields (id, sender, recipient, payload) are fixed once the record
//! is built. Status is freely reassignable. The fingerprint is derived and is
//! only refreshed when asked; changing identity after construction is not
//! supported, so a stale fingerprint cannot arise in the primary flow.

use crate::codec::{SentSummary, StoredRecord};
use crate::error::CoreError;
use crate::fingerprint::{identity_fingerprint, sequence_fingerprint, FingerprintScheme};
use crate::types::{MessageId, MessageStatus};

/// A single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: MessageId,
    sender: String,
    recipient: String,
    payload: String,
    status: MessageStatus,
    fingerprint: String,
    sequence: Option<u64>,
}

impl Record {
    /// Create a new message with a generated ten-digit id.
    ///
    /// Status starts at `New`; the fingerprint is empty until computed.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::with_id(MessageId::generate(), sender, recipient, payload)
    }

    /// Create a new message with a caller-chosen id.
    pub fn with_id(
        id: impl Into<MessageId>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            recipient: recipient.into(),
            payload: payload.into(),
            status: MessageStatus::New,
            fingerprint: String::new(),
            sequence: None,
        }
    }

    /// Rebuild a message from previously persisted fields.
    ///
    /// The id is kept verbatim and the identity-indexed fingerprint is
    /// computed eagerly from the supplied fields.
    pub fn restore(
        id: impl Into<MessageId>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        payload: impl Into<String>,
        status: MessageStatus,
    ) -> Self {
        let mut record = Self::with_id(id, sender, recipient, payload);
        record.status = status;
        record.refresh_fingerprint(FingerprintScheme::IdentityIndexed);
        record
    }

    /// Rebuild a message from its flat persisted form.
    pub fn from_stored(stored: StoredRecord) -> Result<Self, CoreError> {
        if stored.id.is_empty() {
            return Err(CoreError::EmptyId);
        }
        let status = stored.status.parse()?;
        Ok(Self::restore(
            stored.id,
            stored.sender,
            stored.recipient,
            stored.payload,
            status,
        ))
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Send sequence number, once a dispatcher has assigned one.
    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    pub fn set_status(&mut self, status: MessageStatus) {
        self.status = status;
    }

    pub fn set_fingerprint(&mut self, fingerprint: impl Into<String>) {
        self.fingerprint = fingerprint.into();
    }

    pub fn assign_sequence(&mut self, sequence: u64) {
        self.sequence = Some(sequence);
    }

    /// Derive the fingerprint under `scheme` without storing it.
    ///
    /// The sequence-indexed form is empty until a sequence is assigned.
    pub fn fingerprint_for(&self, scheme: FingerprintScheme) -> String {
        match scheme {
            FingerprintScheme::IdentityIndexed => {
                identity_fingerprint(self.id.as_str(), &self.sender, &self.payload)
            }
            FingerprintScheme::SequenceIndexed => match self.sequence {
                Some(seq) => sequence_fingerprint(self.id.as_str(), seq, &self.payload),
                None => String::new(),
            },
        }
    }

    /// Recompute and store the fingerprint under `scheme`.
    pub fn refresh_fingerprint(&mut self, scheme: FingerprintScheme) -> &str {
        self.fingerprint = self.fingerprint_for(scheme);
        &self.fingerprint
    }

    /// The flat key/value form handed to a persistence collaborator.
    pub fn to_stored(&self) -> StoredRecord {
        StoredRecord {
            id: self.id.to_string(),
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            payload: self.payload.clone(),
            status: self.status.to_string(),
        }
    }

    /// The sequence-indexed summary, once a sequence is assigned.
    pub fn sent_summary(&self) -> Option<SentSummary> {
        let index = self.sequence?;
        Some(SentSummary {
            id: self.id.to_string(),
            recipient: self.recipient.clone(),
            payload: self.payload.clone(),
            index,
            hash: self.fingerprint.clone(),
        })
    }
}
