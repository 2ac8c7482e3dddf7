//! Bounded job scheduler.
//!
//! Runs an ordered batch of async jobs with a sliding admission window:
//! never more than `ceiling` in flight, a replacement admitted as soon as
//! any running job completes, full drain before returning.

mod run;

pub use run::{run_bounded, SchedulerError};
