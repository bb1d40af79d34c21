//! The Ledger: insertion-ordered message collection with reports.
//!
//! Every query is a linear scan in insertion order. Ids and fingerprints are
//! not required to be unique; lookups and deletion act on the first match.
//! Report methods render text for direct display; the typed companions
//! (`get`, `longest`, `sent`, `for_recipient`, `remove_by_fingerprint`)
//! expose the same selections for callers that need to branch.

use std::collections::HashSet;
use std::fmt::Write;
use std::path::Path;

use quickchat_core::{FingerprintScheme, MessageStatus, Record};
use quickchat_store::{JsonFileStore, RecordStore};

use crate::error::{LedgerError, Result};

/// In-memory, insertion-ordered collection of messages.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a record.
    ///
    /// Its fingerprint is recomputed with the identity-indexed scheme,
    /// replacing whatever it carried.
    pub fn add(&mut self, mut record: Record) -> &Record {
        record.refresh_fingerprint(FingerprintScheme::IdentityIndexed);
        tracing::debug!(id = %record.id(), fingerprint = record.fingerprint(), "Record added");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Remove and return the first record with exactly `fingerprint`.
    pub fn remove_by_fingerprint(&mut self, fingerprint: &str) -> Result<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.fingerprint() == fingerprint)
            .ok_or_else(|| LedgerError::NotFound(fingerprint.to_string()))?;
        let record = self.records.remove(index);
        tracing::debug!(id = %record.id(), fingerprint, "Record removed");
        Ok(record)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Typed queries
    // ─────────────────────────────────────────────────────────────────────────

    /// First record whose id equals `id`.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id().as_str() == id)
    }

    /// Record with the longest payload; ties go to the earliest.
    pub fn longest(&self) -> Option<&Record> {
        self.records.iter().fold(None, |best: Option<&Record>, r| match best {
            Some(b) if r.payload().chars().count() <= b.payload().chars().count() => Some(b),
            _ => Some(r),
        })
    }

    /// Records with status `Sent`.
    pub fn sent(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|r| r.status() == MessageStatus::Sent)
    }

    /// `Sent` and `Stored` records addressed to `recipient`.
    pub fn for_recipient<'a>(&'a self, recipient: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records
            .iter()
            .filter(move |r| r.recipient() == recipient && r.status().is_visible_to_recipient())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────

    /// Sender and recipient of every sent message.
    pub fn list_sent_details(&self) -> String {
        let mut report = String::from("--- Sent Message Details ---\n");
        let mut found = false;
        for r in self.sent() {
            let _ = writeln!(report, "Sender: {}, Recipient: {}", r.sender(), r.recipient());
            found = true;
        }
        if !found {
            return "No messages have been sent yet.".to_string();
        }
        report
    }

    /// The longest payload, regardless of status.
    pub fn longest_payload(&self) -> String {
        match self.longest() {
            Some(r) => r.payload().to_string(),
            None => "No messages to compare.".to_string(),
        }
    }

    pub fn find_by_id(&self, id: &str) -> String {
        match self.get(id) {
            Some(r) => format!(
                "Message Found!\nRecipient: {}\nMessage: {}",
                r.recipient(),
                r.payload()
            ),
            None => format!("Message with ID [{id}] not found."),
        }
    }

    pub fn find_by_recipient(&self, recipient: &str) -> String {
        let mut report = format!("--- Messages for {recipient} ---\n");
        let mut found = false;
        for r in self.for_recipient(recipient) {
            let _ = writeln!(report, "- {}", r.payload());
            found = true;
        }
        if !found {
            return format!("No messages found for recipient: {recipient}");
        }
        report
    }

    /// Delete the first record with exactly `fingerprint`.
    ///
    /// Matching is case-sensitive; callers normalize case first.
    pub fn delete_by_fingerprint(&mut self, fingerprint: &str) -> String {
        match self.remove_by_fingerprint(fingerprint) {
            Ok(r) => format!("Message \"{}\" successfully deleted.", r.payload()),
            Err(_) => format!("Message with hash [{fingerprint}] not found for deletion."),
        }
    }

    /// Every sent message, numbered from 1 in sent-only order.
    pub fn full_report(&self) -> String {
        let mut report = String::from("--- Full Message Report ---\n\n");
        let mut count = 0usize;
        for r in self.sent() {
            count += 1;
            let _ = write!(
                report,
                "Message #{count}\n  Hash: {}\n  Recipient: {}\n  Message: {}\n\n",
                r.fingerprint(),
                r.recipient(),
                r.payload()
            );
        }
        if count == 0 {
            return "No messages have been sent to report.".to_string();
        }
        report
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Append every record the store holds, in the store's order.
    ///
    /// Nothing is added if any stored record is malformed.
    pub fn import(&mut self, store: &dyn RecordStore) -> Result<usize> {
        let restored = store
            .load()?
            .into_iter()
            .map(Record::from_stored)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::warn!("Rejected stored message: {}", e);
                LedgerError::from(e)
            })?;

        let count = restored.len();
        for record in restored {
            self.add(record);
        }
        tracing::debug!(count, "Imported stored messages");
        Ok(count)
    }

    /// [`Ledger::import`], rendered for display. `source` names the store.
    pub fn import_report(&mut self, store: &dyn RecordStore, source: &str) -> String {
        match self.import(store) {
            Ok(count) => format!("Successfully loaded {count} message(s) from {source}"),
            Err(e) => format!("Error reading {source}: {e}"),
        }
    }

    /// Load a single stored message document and append it.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<&Record> {
        let stored = JsonFileStore::read_file(path)?;
        let record = Record::from_stored(stored).map_err(|e| {
            tracing::warn!("Rejected stored message: {}", e);
            LedgerError::from(e)
        })?;
        Ok(self.add(record))
    }

    /// [`Ledger::import_file`], rendered for display.
    pub fn import_file_report(&mut self, path: impl AsRef<Path>) -> String {
        let path = path.as_ref();
        match self.import_file(path) {
            Ok(_) => format!("Successfully loaded message from {}", path.display()),
            Err(e) => format!("Error reading file {}: {}", path.display(), e),
        }
    }

    /// Save one record through `store`.
    ///
    /// Disregarded messages are never written; returns whether the record
    /// was saved.
    pub fn persist(&self, record: &Record, store: &dyn RecordStore) -> Result<bool> {
        if record.status() == MessageStatus::Disregarded {
            tracing::debug!(id = %record.id(), "Disregarded message not saved");
            return Ok(false);
        }
        store.save(&record.to_stored()).map_err(|e| {
            tracing::warn!(id = %record.id(), "Failed to save message: {}", e);
            LedgerError::from(e)
        })?;
        Ok(true)
    }

    /// Save every record through `store`, in insertion order.
    ///
    /// Stores keep one document per id, so only the first record with a
    /// given id is written. Disregarded messages are skipped. Returns the
    /// number of records saved.
    pub fn export(&self, store: &dyn RecordStore) -> Result<usize> {
        let mut seen = HashSet::new();
        let mut saved = 0;
        for record in &self.records {
            if record.status() == MessageStatus::Disregarded {
                continue;
            }
            if !seen.insert(record.id().as_str()) {
                tracing::warn!(id = %record.id(), "Duplicate message id not exported");
                continue;
            }
            if self.persist(record, store)? {
                saved += 1;
            }
        }
        Ok(saved)
    }
}
