use crate::core::retry::RetryPolicy;
use crate::domain::model::{CarrierRecord, LookupOutcome, SnapshotFields};
use crate::domain::ports::{LookupClient, ProgressStore, RecordSource, ResultSink};
use crate::utils::error::{BatchError, Result};
use tracing::{info, warn};

/// Counters for one batch invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Items skipped because the ledger already held their identifier.
    pub skipped: usize,
    pub found: usize,
    pub inactive: usize,
    /// Items left for the next run: retries exhausted or snapshot layout
    /// mismatch. Never recorded in the ledger.
    pub abandoned: usize,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.found + self.inactive
    }
}

/// Drives the batch: pulls items from the source in order, consults the
/// progress ledger, looks up each unseen identifier under the retry policy,
/// and routes outcomes to the sinks. Progress is recorded immediately after
/// each terminal outcome, so a kill loses at most the in-flight identifier.
pub struct BatchRunner<S, P, R, L> {
    source: S,
    progress: P,
    sink: R,
    client: L,
    retry: RetryPolicy,
}

impl<S, P, R, L> BatchRunner<S, P, R, L>
where
    S: RecordSource,
    P: ProgressStore,
    R: ResultSink,
    L: LookupClient,
{
    pub fn new(source: S, progress: P, sink: R, client: L, retry: RetryPolicy) -> Self {
        Self {
            source,
            progress,
            sink,
            client,
            retry,
        }
    }

    pub async fn run(&mut self) -> Result<RunSummary> {
        self.progress.load()?;

        let mut summary = RunSummary::default();
        while let Some(item) = self.source.next_item()? {
            let usdot_number = item.usdot_number.clone();
            if usdot_number.is_empty() {
                continue;
            }
            if self.progress.contains(&usdot_number) {
                summary.skipped += 1;
                continue;
            }

            match self.resolve(&usdot_number).await? {
                Resolution::Found(fields) => {
                    let record = CarrierRecord::merge(&item, fields);
                    self.sink.write_record(&record)?;
                    self.progress.record(&usdot_number)?;
                    summary.found += 1;
                    info!("USDOT {usdot_number}: snapshot found");
                }
                Resolution::Inactive => {
                    self.sink.write_inactive(&usdot_number)?;
                    self.progress.record(&usdot_number)?;
                    summary.inactive += 1;
                    info!("USDOT {usdot_number}: no retrievable record");
                }
                Resolution::Abandoned => {
                    summary.abandoned += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Bounded retry loop for one identifier. `Abandoned` identifiers stay
    /// out of the ledger so the next run picks them up again.
    async fn resolve(&mut self, usdot_number: &str) -> Result<Resolution> {
        for attempt in 1..=self.retry.max_attempts {
            match self
                .client
                .lookup(usdot_number, self.retry.attempt_timeout)
                .await
            {
                Ok(LookupOutcome::Found(fields)) => return Ok(Resolution::Found(fields)),
                Ok(LookupOutcome::Inactive) => return Ok(Resolution::Inactive),
                Ok(LookupOutcome::TimedOut) => {
                    if attempt < self.retry.max_attempts {
                        warn!("USDOT {usdot_number}: lookup timed out (attempt {attempt}), retrying");
                        tokio::time::sleep(self.retry.backoff).await;
                    } else {
                        warn!(
                            "USDOT {usdot_number}: lookup timed out after {attempt} attempts, leaving for the next run"
                        );
                    }
                }
                Err(BatchError::FieldExtraction { label, .. }) => {
                    warn!("USDOT {usdot_number}: snapshot table is missing {label:?}, skipping");
                    return Ok(Resolution::Abandoned);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Resolution::Abandoned)
    }
}

enum Resolution {
    Found(SnapshotFields),
    Inactive,
    Abandoned,
}
