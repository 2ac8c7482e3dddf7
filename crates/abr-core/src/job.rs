//! One account's end-to-end flow: retried init, main step, single report.

use anyhow::Result;
use async_trait::async_trait;

use crate::accounts::AccountSpec;
use crate::pause::PauseRange;
use crate::reporter::{Category, OutcomeRecord, Reporter};
use crate::retry::{run_with_retry, Attempt, RetryOutcome, RetryPolicy};

/// The platform-specific work a job performs. Implementations own their
/// clients and wallets exclusively; nothing here is shared between jobs.
#[async_trait]
pub trait AccountOps: Send + Sync {
    /// Fragile initialization step (session/wallet setup). A transient
    /// failure returns `Attempt::Failed` and is retried with backoff; an
    /// `Err` is fatal to the job.
    async fn initialize(&self) -> Result<Attempt<()>>;

    /// Main account flow, run after initialization.
    async fn execute(&self) -> Result<()>;
}

/// Terminal status of one job. Every job ends in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Success,
    Error,
}

impl JobStatus {
    pub fn category(&self) -> Category {
        match self {
            JobStatus::Success => Category::Success,
            JobStatus::Error => Category::Error,
        }
    }
}

/// One schedulable unit of work. The job contains every fault raised by its
/// ops: whatever happens inside, it reports exactly once and returns a
/// status instead of propagating to the scheduler.
pub struct AccountJob<O> {
    spec: AccountSpec,
    ops: O,
    retry: RetryPolicy,
    pause_after: PauseRange,
    reporter: Reporter,
}

impl<O: AccountOps> AccountJob<O> {
    pub fn new(
        spec: AccountSpec,
        ops: O,
        retry: RetryPolicy,
        pause_after: PauseRange,
        reporter: Reporter,
    ) -> Self {
        Self {
            spec,
            ops,
            retry,
            pause_after,
            reporter,
        }
    }

    pub async fn run(self) -> JobStatus {
        let account = self.spec.index;
        let record = OutcomeRecord {
            credential: self.spec.credential.clone(),
            proxy: self.spec.proxy.clone(),
            token: self.spec.token.clone(),
        };

        match self.run_flow().await {
            Ok(status) => {
                match status {
                    JobStatus::Success => {
                        tracing::info!(account, "account completed successfully")
                    }
                    JobStatus::Error => {
                        tracing::error!(account, "account completed with errors")
                    }
                }
                self.report(status, &record).await;
                let pause = self.pause_after.duration();
                tracing::info!(
                    account,
                    "sleeping {}s before next account",
                    pause.as_secs()
                );
                tokio::time::sleep(pause).await;
                status
            }
            Err(e) => {
                tracing::error!(account, "account flow failed: {e:#}");
                self.report(JobStatus::Error, &record).await;
                JobStatus::Error
            }
        }
    }

    async fn run_flow(&self) -> Result<JobStatus> {
        let account = self.spec.index;
        tracing::info!(account, "starting account");

        let ops = &self.ops;
        let init = run_with_retry(&self.retry, move || ops.initialize()).await?;
        let init_failed = match init {
            RetryOutcome::Success(()) => false,
            RetryOutcome::Exhausted => {
                tracing::error!(
                    account,
                    "initialization failed after {} attempt(s)",
                    self.retry.max_attempts
                );
                true
            }
        };

        // The main flow still runs when init exhausted its budget; the job
        // reports as errored either way.
        self.ops.execute().await?;

        Ok(if init_failed {
            JobStatus::Error
        } else {
            JobStatus::Success
        })
    }

    /// A storage fault while reporting is logged and swallowed; it does not
    /// change the job's status.
    async fn report(&self, status: JobStatus, record: &OutcomeRecord) {
        if let Err(e) = self.reporter.report(status.category(), record).await {
            tracing::warn!(account = self.spec.index, "could not record outcome: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pause::PauseRange;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeOps {
        init_failures: u32,
        init_fatal: bool,
        execute_fatal: bool,
        init_calls: Arc<AtomicU32>,
        execute_calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl AccountOps for FakeOps {
        async fn initialize(&self) -> Result<Attempt<()>> {
            let n = self.init_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.init_fatal {
                anyhow::bail!("provider unreachable");
            }
            if n <= self.init_failures {
                Ok(Attempt::Failed)
            } else {
                Ok(Attempt::Success(()))
            }
        }

        async fn execute(&self) -> Result<()> {
            self.execute_calls.fetch_add(1, Ordering::SeqCst);
            if self.execute_fatal {
                anyhow::bail!("main flow crashed");
            }
            Ok(())
        }
    }

    fn spec() -> AccountSpec {
        AccountSpec {
            index: 1,
            credential: "0xkey".into(),
            proxy: "proxy".into(),
            token: "token".into(),
        }
    }

    fn job(ops: FakeOps, attempts: u32, reporter: Reporter) -> AccountJob<FakeOps> {
        AccountJob::new(
            spec(),
            ops,
            RetryPolicy::new(attempts, PauseRange(0, 0)).unwrap(),
            PauseRange(0, 0),
            reporter,
        )
    }

    async fn count_lines(path: std::path::PathBuf) -> usize {
        match tokio::fs::read_to_string(path).await {
            Ok(s) => s.lines().count(),
            Err(_) => 0,
        }
    }

    #[tokio::test]
    async fn clean_run_reports_success_once() {
        let dir = tempfile::tempdir().unwrap();
        let ops = FakeOps::default();
        let execute_calls = Arc::clone(&ops.execute_calls);
        let status = job(ops, 3, Reporter::new(dir.path())).run().await;
        assert_eq!(status, JobStatus::Success);
        assert_eq!(execute_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            count_lines(dir.path().join("success/credentials.txt")).await,
            1
        );
        assert_eq!(count_lines(dir.path().join("error/credentials.txt")).await, 0);
    }

    #[tokio::test]
    async fn flaky_init_recovers_within_budget() {
        let dir = tempfile::tempdir().unwrap();
        let ops = FakeOps {
            init_failures: 2,
            ..Default::default()
        };
        let init_calls = Arc::clone(&ops.init_calls);
        let status = job(ops, 3, Reporter::new(dir.path())).run().await;
        assert_eq!(status, JobStatus::Success);
        assert_eq!(init_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_init_reports_error_but_still_executes() {
        let dir = tempfile::tempdir().unwrap();
        let ops = FakeOps {
            init_failures: 10,
            ..Default::default()
        };
        let execute_calls = Arc::clone(&ops.execute_calls);
        let status = job(ops, 2, Reporter::new(dir.path())).run().await;
        assert_eq!(status, JobStatus::Error);
        assert_eq!(execute_calls.load(Ordering::SeqCst), 1);
        assert_eq!(count_lines(dir.path().join("error/credentials.txt")).await, 1);
        assert_eq!(
            count_lines(dir.path().join("success/credentials.txt")).await,
            0
        );
    }

    #[tokio::test]
    async fn fatal_init_reports_error_and_skips_execute() {
        let dir = tempfile::tempdir().unwrap();
        let ops = FakeOps {
            init_fatal: true,
            ..Default::default()
        };
        let init_calls = Arc::clone(&ops.init_calls);
        let execute_calls = Arc::clone(&ops.execute_calls);
        let status = job(ops, 5, Reporter::new(dir.path())).run().await;
        assert_eq!(status, JobStatus::Error);
        assert_eq!(init_calls.load(Ordering::SeqCst), 1, "fatal errors are not retried");
        assert_eq!(execute_calls.load(Ordering::SeqCst), 0);
        assert_eq!(count_lines(dir.path().join("error/credentials.txt")).await, 1);
    }

    #[tokio::test]
    async fn fatal_execute_reports_error_once() {
        let dir = tempfile::tempdir().unwrap();
        let ops = FakeOps {
            execute_fatal: true,
            ..Default::default()
        };
        let status = job(ops, 2, Reporter::new(dir.path())).run().await;
        assert_eq!(status, JobStatus::Error);
        assert_eq!(count_lines(dir.path().join("error/credentials.txt")).await, 1);
        assert_eq!(
            count_lines(dir.path().join("success/credentials.txt")).await,
            0
        );
    }

    #[tokio::test]
    async fn report_failure_does_not_change_status() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("store");
        tokio::fs::create_dir_all(&root).await.unwrap();
        // Occupy the success path with a file so the report itself fails.
        tokio::fs::write(root.join("success"), b"x").await.unwrap();
        let status = job(FakeOps::default(), 2, Reporter::new(&root)).run().await;
        assert_eq!(status, JobStatus::Success);
    }
}
