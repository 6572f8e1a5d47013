use crate::core::retry::RetryPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const SAFER_ENDPOINT: &str = "https://safer.fmcsa.dot.gov/query.asp";

#[derive(Debug, Clone, Parser)]
#[command(name = "safer-batch")]
#[command(about = "Resumable batch retrieval of USDOT carrier snapshots")]
pub struct CliConfig {
    /// Input table of carriers to look up
    #[arg(long, default_value = "Carriers.csv")]
    pub input: PathBuf,

    /// Output table of extracted snapshots (appended across runs)
    #[arg(long, default_value = "output.csv")]
    pub output: PathBuf,

    /// Ledger of identifiers already processed; read at startup, appended
    /// after every resolved item
    #[arg(long, default_value = "processed.csv")]
    pub progress_file: PathBuf,

    /// List of identifiers with no retrievable record
    #[arg(long, default_value = "inactive.csv")]
    pub inactive_file: PathBuf,

    /// SAFER company snapshot query endpoint
    #[arg(long, default_value = SAFER_ENDPOINT)]
    pub endpoint: String,

    /// Time allowed for a single lookup attempt, in seconds
    #[arg(long, default_value = "60")]
    pub lookup_timeout_secs: u64,

    /// Attempts per identifier before it is left for the next run
    #[arg(long, default_value = "2")]
    pub max_attempts: u32,

    /// Delay between attempts, in seconds
    #[arg(long, default_value = "2")]
    pub retry_backoff_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report elapsed time and memory use after the run")]
    pub monitor: bool,
}

impl CliConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            backoff: Duration::from_secs(self.retry_backoff_secs),
            attempt_timeout: Duration::from_secs(self.lookup_timeout_secs),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_path("progress_file", &self.progress_file)?;
        validation::validate_path("inactive_file", &self.inactive_file)?;
        validation::validate_positive_number("max_attempts", self.max_attempts as usize, 1)?;
        validation::validate_range("lookup_timeout_secs", self.lookup_timeout_secs, 1, 600)?;
        Ok(())
    }
}
