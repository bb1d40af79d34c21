//! Report scenarios over a ledger seeded with five messages to mixed
//! recipients and statuses.

use quickchat::store::{JsonFileStore, RecordStore};
use quickchat::{Dispatcher, Ledger, MessageStatus, Record};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn seeded() -> (Ledger, Vec<Record>) {
    init_tracing();
    let records = vec![
        Record::restore("id1", "Funiwe", "+27834557896", "Did you get the cake?", MessageStatus::Sent),
        Record::restore(
            "id2",
            "Funiwe",
            "+27838884567",
            "Where are you? You are late! I have asked you to be on time.",
            MessageStatus::Stored,
        ),
        Record::restore("id3", "Funiwe", "+27834484567", "Yohoooo, I am at your gate.", MessageStatus::Disregarded),
        Record::restore("id4", "Funiwe", "0838884567", "It is dinner time!", MessageStatus::Sent),
        Record::restore("id5", "Funiwe", "+27838884567", "Ok, I am leaving without you.", MessageStatus::Stored),
    ];

    let mut ledger = Ledger::new();
    for r in &records {
        ledger.add(r.clone());
    }
    (ledger, records)
}

#[test]
fn test_sent_details_list_only_sent_messages() {
    let (ledger, _) = seeded();
    assert_eq!(
        ledger.list_sent_details(),
        "--- Sent Message Details ---\n\
         Sender: Funiwe, Recipient: +27834557896\n\
         Sender: Funiwe, Recipient: 0838884567\n"
    );
}

#[test]
fn test_longest_payload_ignores_status() {
    let (ledger, _) = seeded();
    assert_eq!(
        ledger.longest_payload(),
        "Where are you? You are late! I have asked you to be on time."
    );
}

#[test]
fn test_longest_payload_by_length() {
    init_tracing();
    let mut ledger = Ledger::new();
    for (i, len) in [23usize, 62, 28, 19, 30].into_iter().enumerate() {
        let payload = "x".repeat(len);
        ledger.add(Record::restore(format!("id{i}"), "Funiwe", "+27834557896", payload, MessageStatus::Stored));
    }
    assert_eq!(ledger.longest_payload().len(), 62);
}

#[test]
fn test_find_by_id_returns_message_block() {
    let (ledger, _) = seeded();
    assert_eq!(
        ledger.find_by_id("id4"),
        "Message Found!\nRecipient: 0838884567\nMessage: It is dinner time!"
    );
    assert_eq!(ledger.find_by_id("id9"), "Message with ID [id9] not found.");
}

#[test]
fn test_find_by_recipient_excludes_disregarded_and_new() {
    let (mut ledger, _) = seeded();
    ledger.add(Record::restore("id6", "Funiwe", "+27838884567", "Draft only", MessageStatus::New));
    ledger.add(Record::restore("id7", "Funiwe", "+27838884567", "Never mind", MessageStatus::Disregarded));

    assert_eq!(
        ledger.find_by_recipient("+27838884567"),
        "--- Messages for +27838884567 ---\n\
         - Where are you? You are late! I have asked you to be on time.\n\
         - Ok, I am leaving without you.\n"
    );
}

#[test]
fn test_delete_by_fingerprint_then_search() {
    let (mut ledger, records) = seeded();
    let hash = records[1].fingerprint().to_string();
    assert_eq!(hash, "ID:F:WHERETIME.");

    assert_eq!(
        ledger.delete_by_fingerprint(&hash),
        "Message \"Where are you? You are late! I have asked you to be on time.\" successfully deleted."
    );
    assert_eq!(
        ledger.find_by_recipient("+27838884567"),
        "--- Messages for +27838884567 ---\n- Ok, I am leaving without you.\n"
    );
    assert_eq!(ledger.len(), 4);

    let ids: Vec<_> = ledger.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, ["id1", "id3", "id4", "id5"]);
}

#[test]
fn test_full_report_numbers_sent_messages_from_one() {
    let (ledger, records) = seeded();
    let expected = format!(
        "--- Full Message Report ---\n\n\
         Message #1\n  Hash: {}\n  Recipient: +27834557896\n  Message: Did you get the cake?\n\n\
         Message #2\n  Hash: {}\n  Recipient: 0838884567\n  Message: It is dinner time!\n\n",
        records[0].fingerprint(),
        records[3].fingerprint(),
    );
    assert_eq!(ledger.full_report(), expected);
    assert_eq!(records[0].fingerprint(), "ID:F:DIDCAKE?");
    assert_eq!(records[3].fingerprint(), "ID:F:ITTIME!");
}

#[test]
fn test_send_flow_then_report() {
    init_tracing();
    let dispatcher = Dispatcher::new();
    let mut ledger = Ledger::new();

    let mut msg = Record::with_id("0012345678", "Funiwe", "+27718693002", "Hi Mike, can you join us for dinner tonight");
    assert!(dispatcher.mark_sent(&mut msg).ok);
    assert_eq!(msg.fingerprint(), "00:1:HITONIGHT");

    msg.set_status(MessageStatus::Sent);
    let added = ledger.add(msg);
    assert_eq!(added.fingerprint(), "00:F:HITONIGHT");
    assert_eq!(added.sequence(), Some(1));

    assert!(ledger.full_report().contains("Message #1\n  Hash: 00:F:HITONIGHT\n"));
    assert!(dispatcher.last_sent_report().contains("Message Hash: 00:1:HITONIGHT"));
}

#[test]
fn test_json_store_roundtrip_through_ledger() {
    let (ledger, _) = seeded();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    assert_eq!(ledger.export(&store).unwrap(), 4);
    assert_eq!(store.load().unwrap().len(), 4);

    let mut restored = Ledger::new();
    let source = dir.path().display().to_string();
    assert_eq!(
        restored.import_report(&store, &source),
        format!("Successfully loaded 4 message(s) from {source}")
    );
    assert_eq!(restored.full_report(), ledger.full_report());
    assert_eq!(restored.longest_payload(), ledger.longest_payload());
}

#[test]
fn test_json_store_reload_keeps_insertion_order() {
    init_tracing();
    let mut ledger = Ledger::new();
    ledger.add(Record::restore("9000000000", "Funiwe", "+27834557896", "first sent", MessageStatus::Sent));
    ledger.add(Record::restore("1000000000", "Funiwe", "+27834557896", "second sent", MessageStatus::Sent));
    ledger.add(Record::restore("5000000000", "Funiwe", "+27834557896", "third stored", MessageStatus::Stored));

    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    ledger.export(&store).unwrap();

    let mut restored = Ledger::new();
    restored.import(&store).unwrap();

    assert!(restored.full_report().starts_with(
        "--- Full Message Report ---\n\nMessage #1\n  Hash: 90:F:FIRSTSENT\n"
    ));
    assert_eq!(restored.full_report(), ledger.full_report());
    assert_eq!(
        restored.find_by_recipient("+27834557896"),
        ledger.find_by_recipient("+27834557896")
    );
}
