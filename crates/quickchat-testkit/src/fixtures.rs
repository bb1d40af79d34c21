//! Test fixtures and helpers.
//!
//! The standard scenario: five messages from one sender to four recipients,
//! covering every stored status and one malformed recipient.

use quickchat::{Dispatcher, Ledger};
use quickchat_core::{MessageStatus, Record};
use quickchat_store::MemoryStore;

pub const SENDER: &str = "Funiwe";

/// A ledger seeded with the standard scenario, plus a dispatcher.
pub struct ReportFixture {
    pub ledger: Ledger,
    pub dispatcher: Dispatcher,
    /// The seeded records, in insertion order, with fingerprints set.
    pub records: Vec<Record>,
}

impl ReportFixture {
    pub fn new() -> Self {
        let records = scenario_records();
        let mut ledger = Ledger::new();
        for record in &records {
            ledger.add(record.clone());
        }
        Self {
            ledger,
            dispatcher: Dispatcher::new(),
            records,
        }
    }

    /// The seeded record with `id`.
    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id().as_str() == id)
    }
}

impl Default for ReportFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The five scenario records, restored with identity fingerprints.
pub fn scenario_records() -> Vec<Record> {
    [
        ("id1", "+27834557896", "Did you get the cake?", MessageStatus::Sent),
        (
            "id2",
            "+27838884567",
            "Where are you? You are late! I have asked you to be on time.",
            MessageStatus::Stored,
        ),
        ("id3", "+27834484567", "Yohoooo, I am at your gate.", MessageStatus::Disregarded),
        ("id4", "0838884567", "It is dinner time!", MessageStatus::Sent),
        ("id5", "+27838884567", "Ok, I am leaving without you.", MessageStatus::Stored),
    ]
    .into_iter()
    .map(|(id, recipient, payload, status)| Record::restore(id, SENDER, recipient, payload, status))
    .collect()
}

/// A memory store holding the scenario records.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::with_records(scenario_records().iter().map(Record::to_stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickchat_store::{JsonFileStore, RecordStore};

    #[test]
    fn test_fixture_matches_scenario() {
        let fixture = ReportFixture::new();
        assert_eq!(fixture.ledger.len(), 5);
        assert_eq!(fixture.record("id2").unwrap().fingerprint(), "ID:F:WHERETIME.");
        assert_eq!(fixture.ledger.sent().count(), 2);
    }

    #[test]
    fn test_seeded_store_imports() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.import(&seeded_store()).unwrap(), 5);
        assert_eq!(ledger.full_report(), ReportFixture::new().ledger.full_report());
    }

    #[test]
    fn test_scenario_survives_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let fixture = ReportFixture::new();
        assert_eq!(fixture.ledger.export(&store).unwrap(), 4);

        let stored: Vec<_> = store.load().unwrap();
        let ids: Vec<_> = stored.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["id1", "id2", "id4", "id5"]);
        assert!(stored.iter().all(|s| s.status != "Disregarded"));
    }

    #[test]
    fn test_fixture_dispatcher_starts_fresh() {
        let fixture = ReportFixture::new();
        assert_eq!(fixture.dispatcher.total_sent(), 0);
    }
}
