//! Backoff for transient registration failures.

use crate::registration::SubmissionError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// How many times to try a registration and how long to wait in between.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts including the first, at least 1
    pub max_attempts: u32,
    /// Wait before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single wait
    pub max_delay: Duration,
    /// Growth factor between consecutive waits
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// `max_attempts` of 0 is treated as 1.
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Three attempts, waiting 500ms then 1s.
    pub fn registration() -> Self {
        Self::new(3, Duration::from_millis(500)).with_max_delay(Duration::from_secs(2))
    }

    /// Waits between consecutive attempts, one fewer than `max_attempts`.
    pub fn backoff(&self) -> impl Iterator<Item = Duration> + '_ {
        (1..self.max_attempts.max(1)).map(move |retry| self.delay_before_retry(retry))
    }

    fn delay_before_retry(&self, retry: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(retry.saturating_sub(1) as i32);
        Duration::try_from_secs_f64(self.initial_delay.as_secs_f64() * factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::registration()
    }
}

/// Run `attempt` until it succeeds, fails terminally, or attempts run out.
///
/// Only [`SubmissionError::is_transient`] errors are retried. The last error
/// is returned when every attempt fails.
pub async fn retry_transient<T, F, Fut>(
    config: &RetryConfig,
    label: &str,
    mut attempt: F,
) -> Result<T, SubmissionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SubmissionError>>,
{
    let mut waits = config.backoff();
    let mut tried = 1;

    loop {
        match attempt().await {
            Ok(value) => {
                if tried > 1 {
                    debug!("{}: succeeded on attempt {}", label, tried);
                }
                return Ok(value);
            }
            Err(e) if !e.is_transient() => {
                debug!("{}: {} is terminal, not retrying", label, e);
                return Err(e);
            }
            Err(e) => match waits.next() {
                Some(wait) => {
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {:?}",
                        label, tried, config.max_attempts, e, wait
                    );
                    sleep(wait).await;
                    tried += 1;
                }
                None => {
                    warn!("{}: giving up after {} attempts: {}", label, tried, e);
                    return Err(e);
                }
            },
        }
    }
}
