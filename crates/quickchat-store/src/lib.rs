//! # QuickChat Store
//!
//! Storage abstraction for QuickChat. The ledger is handed a [`RecordStore`]
//! that can load a sequence of raw records and save one record at a time; it
//! never depends on a particular format.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - The trait for loading and saving records
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`JsonFileStore`] - One `message_<id>.json` document per record
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quickchat_store::{JsonFileStore, RecordStore};
//!
//! let store = JsonFileStore::new("messages");
//! for stored in store.load().unwrap() {
//!     println!("{} -> {}", stored.id, stored.recipient);
//! }
//! ```

pub mod error;
pub mod json;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::RecordStore;
