//! Retry loop: run an async operation until success or the budget is spent.

use std::future::Future;

use super::policy::{RetryDecision, RetryPolicy};

/// Result of a single attempt. A transient failure is a value, not an
/// error; only a raised `Err` aborts the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt<T> {
    Success(T),
    Failed,
}

/// Final outcome of the whole retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    /// Some attempt succeeded.
    Success(T),
    /// Every attempt in the budget failed.
    Exhausted,
}

impl<T> RetryOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, RetryOutcome::Success(_))
    }
}

/// Runs an async operation until it succeeds or the attempt budget is spent.
/// On a transient failure, sleeps a jittered backoff then tries again; the
/// sleep is skipped after the final attempt. An `Err` from the operation is
/// fatal and propagates immediately without further attempts.
pub async fn run_with_retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut op: F,
) -> Result<RetryOutcome<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Attempt<T>, E>>,
{
    let mut attempt = 1u32;
    loop {
        match op().await? {
            Attempt::Success(value) => return Ok(RetryOutcome::Success(value)),
            Attempt::Failed => match policy.decide(attempt) {
                RetryDecision::NoRetry => return Ok(RetryOutcome::Exhausted),
                RetryDecision::RetryAfter(delay) => {
                    tracing::debug!(
                        attempt,
                        max = policy.max_attempts,
                        delay_secs = delay.as_secs(),
                        "attempt failed, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            },
        }
    }
}
