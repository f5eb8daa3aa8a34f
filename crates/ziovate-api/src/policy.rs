//! Call policy: deadlines and bounded retry for seam operations.
//!
//! The stub never touches the network, but the seam's contract is written
//! for the day it does: every call must complete or fail within a bounded
//! time, and transient failures are retried with exponential backoff while
//! permanent ones surface immediately. `CallPolicy` wraps any seam operation
//! in exactly that behavior.
//!
//! Cancellation needs no machinery of its own: dropping the future returned
//! by `execute` (navigation-away, in UI terms) abandons the in-flight call.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use ziovate_contracts::{ApiError, ApiResult};

/// Deadline and retry settings applied around one seam operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPolicy {
    /// Per-attempt deadline. An attempt that exceeds it fails with `Timeout`.
    pub request_timeout: Duration,
    /// Total attempts, including the first. Must be at least 1.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub backoff_base: Duration,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_millis(3000),
            max_attempts: 3,
            backoff_base: Duration::from_millis(200),
        }
    }
}

impl CallPolicy {
    /// Run `operation` under this policy.
    ///
    /// Each attempt is raced against `request_timeout`; elapsing converts to
    /// `ApiError::Timeout`. Transient failures (`is_transient()`) are retried
    /// up to `max_attempts` total attempts with doubling backoff, and the
    /// last error is returned once attempts are exhausted. Permanent failures
    /// return immediately — retrying a rejected password or a validation
    /// error would fail identically.
    pub async fn execute<T, F, Fut>(&self, op: &str, mut operation: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let outcome = match tokio::time::timeout(self.request_timeout, operation()).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout {
                    elapsed_ms: self.request_timeout.as_millis() as u64,
                }),
            };

            match outcome {
                Ok(value) => {
                    debug!(op, attempt, "call succeeded");
                    return Ok(value);
                }
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    let delay = self.backoff_base * 2u32.saturating_pow(attempt - 1);
                    warn!(
                        op,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    warn!(op, attempt, error = %err, "call failed");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use ziovate_contracts::Ack;

    fn quick_policy() -> CallPolicy {
        CallPolicy {
            request_timeout: Duration::from_millis(100),
            max_attempts: 3,
            backoff_base: Duration::from_millis(10),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failures_are_retried_until_success() {
        let attempts = AtomicU32::new(0);
        let policy = quick_policy();

        let result = policy
            .execute("login", || {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(ApiError::Unreachable { reason: "flaky".into() })
                    } else {
                        Ok(Ack::ok())
                    }
                }
            })
            .await;

        assert!(result.unwrap().success);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_failures_are_not_retried() {
        let attempts = AtomicU32::new(0);
        let policy = quick_policy();

        let result: ApiResult<Ack> = policy
            .execute("login", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(ApiError::Auth { reason: "bad password".into() }) }
            })
            .await;

        assert!(matches!(result.unwrap_err(), ApiError::Auth { .. }));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_retries_return_the_last_error() {
        let attempts = AtomicU32::new(0);
        let policy = quick_policy();

        let result: ApiResult<Ack> = policy
            .execute("fetch_doctor_patients", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(ApiError::Unreachable { reason: "still down".into() }) }
            })
            .await;

        assert!(matches!(result.unwrap_err(), ApiError::Unreachable { .. }));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn a_hanging_call_becomes_a_timeout() {
        let policy = CallPolicy {
            max_attempts: 1,
            ..quick_policy()
        };

        let result: ApiResult<Ack> = policy
            .execute("upload_prescription", || std::future::pending())
            .await;

        match result.unwrap_err() {
            ApiError::Timeout { elapsed_ms } => assert_eq!(elapsed_ms, 100),
            other => panic!("expected Timeout, got {:?}", other),
        }
    }
}
