use crate::domain::model::{CarrierRecord, LookupOutcome, WorkItem};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Lazy, finite, single-pass sequence of work items in source order. Rows
/// without a usable identifier are not valid work and are never produced.
pub trait RecordSource {
    fn next_item(&mut self) -> Result<Option<WorkItem>>;
}

/// Ledger of identifiers that reached a terminal outcome. An identifier is
/// recorded if and only if it will never be re-attempted.
pub trait ProgressStore {
    /// Populates the in-memory set from persisted state; an absent ledger is
    /// an empty one. Returns the number of identifiers loaded.
    fn load(&mut self) -> Result<usize>;

    fn contains(&self, usdot_number: &str) -> bool;

    /// Durably appends the identifier and updates the in-memory set. The
    /// write is flushed before this returns.
    fn record(&mut self, usdot_number: &str) -> Result<()>;
}

/// Append-only destinations for extracted records and inactive identifiers.
/// Every write is flushed before the call returns.
pub trait ResultSink {
    fn write_record(&mut self, record: &CarrierRecord) -> Result<()>;

    fn write_inactive(&mut self, usdot_number: &str) -> Result<()>;
}

/// One self-contained query against the remote registry. Calls are
/// independent: no state carries over from one identifier to the next.
#[async_trait]
pub trait LookupClient: Send + Sync {
    async fn lookup(&self, usdot_number: &str, timeout: Duration) -> Result<LookupOutcome>;
}
