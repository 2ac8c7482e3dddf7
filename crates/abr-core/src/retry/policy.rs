use std::time::Duration;

use crate::config::ConfigError;
use crate::pause::PauseRange;

/// Decision returned by the retry policy after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// The attempt budget is spent; stop retrying.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Fixed attempt budget with a jittered backoff range.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Inclusive backoff range in seconds; each delay is drawn uniformly.
    pub backoff: PauseRange,
}

impl RetryPolicy {
    /// Build a policy, rejecting a zero attempt budget or an unordered range.
    pub fn new(max_attempts: u32, backoff: PauseRange) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if !backoff.is_ordered() {
            return Err(ConfigError::UnorderedRange {
                field: "pause_between_attempts",
                min: backoff.min_secs(),
                max: backoff.max_secs(),
            });
        }
        Ok(Self {
            max_attempts,
            backoff,
        })
    }

    /// Compute the decision after a failed attempt. `attempt` is 1-based
    /// (1 = first attempt). No delay is drawn once the budget is spent, so
    /// there is never a trailing sleep before giving up.
    pub fn decide(&self, attempt: u32) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.backoff.duration())
    }
}
