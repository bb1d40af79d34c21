//! Proptest generators for property-based testing.

use proptest::prelude::*;

use quickchat_core::{MessageId, MessageStatus, Record};

/// A ten-digit message id.
pub fn message_id() -> impl Strategy<Value = String> {
    "[0-9]{10}".prop_map(String::from)
}

/// A sender name.
pub fn sender() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}".prop_map(String::from)
}

/// A recipient number that passes the default rules.
pub fn valid_recipient() -> impl Strategy<Value = String> {
    "\\+27[0-9]{9}".prop_map(String::from)
}

/// A recipient number that fails the default rules.
pub fn invalid_recipient() -> impl Strategy<Value = String> {
    prop_oneof![
        "0[0-9]{9}".prop_map(String::from),
        "\\+27[0-9]{0,8}".prop_map(String::from),
        "\\+27[0-9]{10,12}".prop_map(String::from),
        "\\+(1|44|91)[0-9]{9}".prop_map(String::from),
        Just(String::new()),
    ]
}

/// A payload of up to `max_words` words.
pub fn payload(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z?!.,]{1,12}", 0..=max_words).prop_map(|w| w.join(" "))
}

/// A single word.
pub fn word() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}".prop_map(String::from)
}

/// A whitespace-only payload.
pub fn blank_payload() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}".prop_map(String::from)
}

/// A message status.
pub fn status() -> impl Strategy<Value = MessageStatus> {
    prop_oneof![
        Just(MessageStatus::New),
        Just(MessageStatus::Sent),
        Just(MessageStatus::Stored),
        Just(MessageStatus::Disregarded),
    ]
}

/// Parameters for generating a record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub id: String,
    pub sender: String,
    pub recipient: String,
    pub payload: String,
    pub status: MessageStatus,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            message_id(),
            sender(),
            prop_oneof![valid_recipient(), invalid_recipient()],
            payload(12),
            status(),
        )
            .prop_map(|(id, sender, recipient, payload, status)| RecordParams {
                id,
                sender,
                recipient,
                payload,
                status,
            })
            .boxed()
    }
}

/// Build a restored record from parameters.
pub fn record_from_params(params: &RecordParams) -> Record {
    Record::restore(
        MessageId::new(params.id.clone()),
        params.sender.clone(),
        params.recipient.clone(),
        params.payload.clone(),
        params.status,
    )
}
