//! The Dispatcher: validates messages and issues send sequence numbers.
//!
//! The send counter and the most-recently-sent summary belong to a
//! dispatcher instance rather than to the process. Both live behind one
//! mutex, so incrementing the counter and recording the summary happen as a
//! single step even if the dispatcher is shared.

use std::sync::{Mutex, MutexGuard, PoisonError};

use quickchat_core::{sequence_fingerprint, Check, Record, SentSummary};

use crate::config::DispatcherConfig;
use crate::error::SendError;

const MESSAGE_SENT: &str = "Message successfully sent.";
const NOTHING_SENT: &str = "No messages have been sent yet.";

#[derive(Debug, Default)]
struct DispatchState {
    /// Sequence number of the last successful send; 0 before any send.
    sent: u64,
    last: Option<SentSummary>,
}

/// Issues sends: runs the send checks, then assigns a sequence number and a
/// sequence-indexed fingerprint.
#[derive(Debug, Default)]
pub struct Dispatcher {
    config: DispatcherConfig,
    state: Mutex<DispatchState>,
}

impl Dispatcher {
    /// Create a dispatcher with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            config,
            state: Mutex::default(),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Mark `record` as sent, rendering the outcome for display.
    ///
    /// The record's status is left alone; callers set it.
    pub fn mark_sent(&self, record: &mut Record) -> Check {
        match self.try_mark_sent(record) {
            Ok(_) => Check::pass(MESSAGE_SENT),
            Err(e) => Check::fail(e.to_string()),
        }
    }

    /// Mark `record` as sent.
    ///
    /// Checks run in order and stop at the first failure: non-empty payload,
    /// payload length, recipient format. On success the counter advances,
    /// the record receives the new sequence number and its sequence-indexed
    /// fingerprint, and the summary becomes the last-sent summary. On
    /// failure neither the record nor the dispatcher changes.
    pub fn try_mark_sent(&self, record: &mut Record) -> Result<SentSummary, SendError> {
        let rules = &self.config.rules;
        rules.validate_not_empty(Some(record.payload()))?;
        rules.validate_payload_length(Some(record.payload()))?;
        rules.validate_recipient_format(Some(record.recipient()))?;

        let mut state = self.lock();
        let sequence = state.sent + 1;
        let fingerprint = sequence_fingerprint(record.id().as_str(), sequence, record.payload());
        if fingerprint.is_empty() {
            tracing::warn!(id = %record.id(), "Message id too short to fingerprint");
            return Err(SendError::FingerprintUnavailable);
        }

        record.assign_sequence(sequence);
        record.set_fingerprint(fingerprint.clone());

        let summary = SentSummary {
            id: record.id().to_string(),
            recipient: record.recipient().to_string(),
            payload: record.payload().to_string(),
            index: sequence,
            hash: fingerprint,
        };
        state.sent = sequence;
        state.last = Some(summary.clone());

        tracing::debug!(id = %record.id(), sequence, "Message marked sent");
        Ok(summary)
    }

    /// The most recently sent message, if any.
    pub fn last_sent(&self) -> Option<SentSummary> {
        self.lock().last.clone()
    }

    /// Display block for the most recently sent message.
    pub fn last_sent_report(&self) -> String {
        self.lock()
            .last
            .as_ref()
            .map_or_else(|| NOTHING_SENT.to_string(), SentSummary::render)
    }

    /// Number of successful sends so far.
    pub fn total_sent(&self) -> u64 {
        self.lock().sent
    }

    /// Forget all sends. Intended for test setup.
    pub fn reset(&self) {
        *self.lock() = DispatchState::default();
    }

    fn lock(&self) -> MutexGuard<'_, DispatchState> {
        // The state is two plain fields updated together; a panic cannot
        // leave it half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
