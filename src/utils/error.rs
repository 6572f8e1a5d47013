use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot for USDOT {usdot_number} is missing the {label:?} field")]
    FieldExtraction {
        usdot_number: String,
        label: &'static str,
    },

    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BatchError>;
