//! # QuickChat Testkit
//!
//! Testing utilities for QuickChat.
//!
//! - **Golden vectors**: fingerprints with known expected output
//! - **Generators**: proptest strategies for messages and recipients
//! - **Fixtures**: a ledger seeded with the standard five-message scenario
//!
//! ```rust
//! use quickchat_testkit::fixtures::ReportFixture;
//!
//! let fixture = ReportFixture::new();
//! assert_eq!(fixture.ledger.len(), 5);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{seeded_store, ReportFixture};
pub use generators::{record_from_params, RecordParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
