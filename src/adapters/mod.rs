// Adapters layer: concrete implementations of the domain ports against
// external systems (CSV files, the progress ledger, the SAFER endpoint).

pub mod csv_sink;
pub mod csv_source;
pub mod progress;
pub mod safer;
