//! Serialized outcome reporting.
//!
//! All jobs in a run append their outcome records through one `Reporter`
//! handle. A single shared mutex serializes the whole record write, so
//! concurrent jobs can never interleave lines in the per-field files.

mod record;
mod sink;

pub use record::{Category, OutcomeRecord};
pub use sink::{ReportError, Reporter};
