pub mod retry;
pub mod runner;

pub use crate::domain::model::{CarrierRecord, LookupOutcome, SnapshotFields, WorkItem};
pub use crate::domain::ports::{LookupClient, ProgressStore, RecordSource, ResultSink};
pub use crate::utils::error::Result;
