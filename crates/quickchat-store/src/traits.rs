//! RecordStore trait: the abstract interface for message persistence.

use quickchat_core::StoredRecord;

use crate::error::Result;

/// Load/save capability handed to the ledger.
///
/// Calls are synchronous and complete before returning. Implementations
/// decide the on-disk shape; the ledger only sees [`StoredRecord`]s.
pub trait RecordStore: Send + Sync {
    /// Load every persisted record, in the store's natural order.
    fn load(&self) -> Result<Vec<StoredRecord>>;

    /// Persist one record, replacing any earlier copy with the same id.
    fn save(&self, record: &StoredRecord) -> Result<()>;
}
