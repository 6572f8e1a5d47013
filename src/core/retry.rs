use std::time::Duration;

/// Retry policy for one identifier's lookup attempts. A single policy covers
/// every attempt: the per-attempt timeout does not vary between the first
/// try and retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per identifier before it is left for the next run.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
    /// Time allowed for a single lookup call.
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Duration::from_secs(2),
            attempt_timeout: Duration::from_secs(60),
        }
    }
}
