//! Record source trait
//!
//! Defines the interface that every provider of daily records implements.

use crate::error::Result;
use crate::record::DailyRecord;

/// A source of daily astronomy records
///
/// Implementations are called from a worker thread, hence `Send + Sync`.
pub trait ApodSource: Send + Sync {
    /// Display name for the source (e.g., "NASA APOD")
    fn name(&self) -> &'static str;

    /// Fetch a batch of `count` records, in the order the source returns them
    fn fetch_batch(&self, count: usize) -> Result<Vec<DailyRecord>>;
}
