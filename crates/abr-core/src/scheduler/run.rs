use std::future::Future;
use tokio::task::JoinSet;

/// Scheduler-level fault. Individual job failures are contained inside the
/// jobs themselves and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("concurrency ceiling must be at least 1")]
    ZeroCeiling,
    #[error("job task join failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Runs jobs with up to `ceiling` in flight at once.
///
/// Jobs are admitted in submission order; whenever one completes, the next
/// queued job is started until the queue is empty, then the remaining jobs
/// drain. Results are collected in completion order, which may differ from
/// submission order.
///
/// A job that panics aborts the whole run with `SchedulerError::Join`; jobs
/// are expected to catch their own faults and return a status instead.
pub async fn run_bounded<Fut>(
    jobs: Vec<Fut>,
    ceiling: usize,
) -> Result<Vec<Fut::Output>, SchedulerError>
where
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    if ceiling == 0 {
        return Err(SchedulerError::ZeroCeiling);
    }

    let total = jobs.len();
    let mut queue = jobs.into_iter();
    let mut results = Vec::with_capacity(total);
    let mut join_set = JoinSet::new();

    loop {
        while join_set.len() < ceiling {
            let Some(job) = queue.next() else {
                break;
            };
            join_set.spawn(job);
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        results.push(res?);
    }

    debug_assert_eq!(results.len(), total);
    Ok(results)
}
