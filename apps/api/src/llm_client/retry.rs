//! Retry with exponential backoff for outbound LLM calls.
//!
//! Only quota/overload failures are retried. Anything else is returned to the
//! caller on the first failure, without sleeping.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// HTTP statuses the LLM provider uses for "slow down" and "overloaded".
pub const RETRYABLE_STATUSES: &[u16] = &[429, 503];

/// Lowercased fragments that mark an error message as a quota/overload signal.
const RETRYABLE_MESSAGE_PATTERNS: &[&str] = &[
    "429",
    "503",
    "quota",
    "rate limit",
    "resource_exhausted",
    "resource exhausted",
    "overloaded",
    "unavailable",
    "try again later",
];

/// Classifies an error as worth retrying.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// Returns true when `message` carries one of the known quota/overload signals.
pub fn message_is_retryable(message: &str) -> bool {
    let lower = message.to_lowercase();
    RETRYABLE_MESSAGE_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first call. Always at least 1.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Delay before retry number `retry` (1-based): base, 2×base, 4×base, ...
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }
}

/// Runs `op` until it succeeds, fails with a non-retryable error, or the
/// policy's attempt budget is spent. `op` receives the 0-based attempt index.
pub async fn retry_with_backoff<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let retries_left = attempt + 1 < max_attempts;
                if !err.is_retryable() || !retries_left {
                    return Err(err);
                }

                let retry = attempt + 1;
                let delay = policy.delay_for(retry);
                warn!(
                    "LLM call attempt {}/{} failed ({}), retrying after {}ms...",
                    retry,
                    max_attempts,
                    err,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt = retry;
            }
        }
    }
}
