//! # QuickChat Core
//!
//! Pure primitives for QuickChat: message records, fingerprints, and the
//! validation rules that decide whether a message is ready to send.
//!
//! This crate contains no I/O and no storage. Every validation and
//! fingerprint function fails closed: malformed content yields a descriptive
//! [`Check`] or an empty fingerprint, never a panic.
//!
//! ## Key Types
//!
//! - [`Record`] - One message's identity, content, status, and fingerprint
//! - [`MessageId`] - Ten-digit generated or externally supplied identifier
//! - [`MessageStatus`] - `New`, `Sent`, `Stored`, or `Disregarded`
//! - [`FingerprintScheme`] - Sequence-indexed or identity-indexed derivation
//! - [`StoredRecord`] / [`SentSummary`] - Flat key/value persisted shapes

pub mod codec;
pub mod error;
pub mod fingerprint;
pub mod record;
pub mod types;
pub mod validation;

pub use codec::{SentSummary, StoredRecord};
pub use error::{CoreError, ValidationError};
pub use fingerprint::{
    identity_fingerprint, identity_fingerprint_opt, sequence_fingerprint,
    sequence_fingerprint_opt, FingerprintScheme,
};
pub use record::Record;
pub use types::{validate_id_format, MessageId, MessageStatus};
pub use validation::{
    check_payload_length, check_recipient_format, validate_payload_length,
    validate_recipient_format, Check, Rules, DEFAULT_COUNTRY_CODE, MAX_PAYLOAD_CHARS,
};
