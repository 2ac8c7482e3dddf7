//! ABR core: bounded-concurrency account batch engine.
//!
//! The engine is three small pieces composed by `job::AccountJob`:
//! `scheduler::run_bounded` (sliding-window admission), `retry` (jittered
//! backoff around fragile steps), and `reporter` (mutex-serialized
//! append-only outcome files).

pub mod accounts;
pub mod config;
pub mod job;
pub mod logging;
pub mod pause;
pub mod reporter;
pub mod retry;
pub mod scheduler;
