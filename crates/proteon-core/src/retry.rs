//! Bounded retry with exponential backoff and a per-attempt timeout.
//!
//! Transient provider errors are retried locally; only exhaustion (or a
//! non-transient error) is surfaced to the caller. Every attempt is
//! bounded — no external call blocks without a timeout.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::errors::ProviderError;

/// Retry policy for one pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub attempts: u32,
    /// First backoff delay; doubles per attempt.
    pub base_delay: Duration,
    /// Per-attempt timeout.
    pub timeout: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, base_delay_ms: u64, timeout_ms: u64) -> Self {
        Self {
            attempts: attempts.max(1),
            base_delay: Duration::from_millis(base_delay_ms),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Run `op` until it succeeds, a non-transient error occurs, or the
    /// attempt budget is exhausted. Returns the attempt count alongside
    /// the final error so callers can report it.
    pub async fn run<T, F, Fut>(&self, stage: &str, op: F) -> Result<T, (u32, ProviderError)>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        let mut delay = self.base_delay;
        let mut attempt = 0;
        loop {
            attempt += 1;
            let result = match tokio::time::timeout(self.timeout, op()).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout {
                    ms: self.timeout.as_millis() as u64,
                }),
            };

            match result {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if !error.is_transient() || attempt >= self.attempts {
                        return Err((attempt, error));
                    }
                    warn!(stage, attempt, %error, "transient failure, backing off");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn succeeds_first_try() {
        let policy = RetryPolicy::new(3, 1, 1_000);
        let result: Result<u32, _> = policy.run("test", || async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn retries_transient_until_budget_exhausted() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, 1, 1_000);
        let result: Result<u32, _> = policy
            .run("test", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(ProviderError::Unavailable {
                        reason: "down".into(),
                    })
                }
            })
            .await;
        let (attempts, _) = result.unwrap_err();
        assert_eq!(attempts, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_transient_errors_fail_fast() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, 1, 1_000);
        let result: Result<u32, _> = policy
            .run("test", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(ProviderError::InvalidResponse {
                        reason: "garbage".into(),
                    })
                }
            })
            .await;
        let (attempts, error) = result.unwrap_err();
        assert_eq!(attempts, 1);
        assert!(!error.is_transient());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn hanging_attempts_are_timed_out() {
        let policy = RetryPolicy::new(1, 1, 10);
        let result: Result<u32, _> = policy
            .run("test", || async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(1)
            })
            .await;
        let (_, error) = result.unwrap_err();
        assert!(matches!(error, ProviderError::Timeout { .. }));
    }
}
