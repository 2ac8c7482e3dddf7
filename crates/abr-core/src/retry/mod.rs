//! Retry and backoff policy.
//!
//! Wraps a fallible async operation in a fixed attempt budget with a
//! uniformly jittered sleep between attempts. Success and failure are
//! explicit types; a raised error is fatal and is never retried.

mod policy;
mod run;

pub use policy::{RetryDecision, RetryPolicy};
pub use run::{run_with_retry, Attempt, RetryOutcome};
