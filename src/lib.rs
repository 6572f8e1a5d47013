pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::csv_sink::CsvResultSink;
pub use crate::adapters::csv_source::CsvRecordSource;
pub use crate::adapters::progress::FileProgressStore;
pub use crate::adapters::safer::SaferLookupClient;
pub use crate::config::CliConfig;
pub use crate::core::retry::RetryPolicy;
pub use crate::core::runner::{BatchRunner, RunSummary};
pub use crate::utils::error::{BatchError, Result};
