//! # QuickChat
//!
//! Message record-keeping for QuickChat: validate and fingerprint messages,
//! track their status, and answer reports over the accumulated set.
//!
//! ## Overview
//!
//! - **Records**: a message's id, sender, recipient, payload, status, and
//!   derived fingerprint
//! - **Dispatcher**: runs the send checks and issues sequence numbers
//! - **Ledger**: insertion-ordered collection with lookups, reports, and
//!   deletion by fingerprint
//! - **Stores**: load/save collaborators the ledger can be handed
//!
//! ## Usage
//!
//! ```rust
//! use quickchat::{Dispatcher, Ledger, MessageStatus, Record};
//!
//! let dispatcher = Dispatcher::new();
//! let mut ledger = Ledger::new();
//!
//! let mut msg = Record::new("Funiwe", "+27718693002", "Hi Mike, can you join us for dinner tonight");
//! let check = dispatcher.mark_sent(&mut msg);
//! assert!(check.ok);
//!
//! msg.set_status(MessageStatus::Sent);
//! ledger.add(msg);
//!
//! println!("{}", ledger.full_report());
//! ```
//!
//! ## Re-exports
//!
//! - `quickchat::core` - Records, fingerprints, validation
//! - `quickchat::store` - Storage abstraction and implementations

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod ledger;

// Re-export component crates
pub use quickchat_core as core;
pub use quickchat_store as store;

// Re-export main types for convenience
pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
pub use error::{LedgerError, Result, SendError};
pub use ledger::Ledger;

// Re-export commonly used core types
pub use quickchat_core::{
    Check, FingerprintScheme, MessageId, MessageStatus, Record, Rules, SentSummary, StoredRecord,
};
