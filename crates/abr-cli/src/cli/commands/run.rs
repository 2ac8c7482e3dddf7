//! `abr run` – run the selected accounts through the engine.

use anyhow::{bail, Result};
use std::path::Path;

use abr_core::accounts::{plan_accounts, read_lines, AccountSpec};
use abr_core::config::AbrConfig;
use abr_core::job::{AccountJob, JobStatus};
use abr_core::reporter::Reporter;
use abr_core::retry::RetryPolicy;
use abr_core::scheduler::run_bounded;

use crate::cli::ops::Preflight;

/// The three input files plus the outcome stores all live under one data dir.
pub(super) struct Inputs {
    pub credentials: Vec<String>,
    pub proxies: Vec<String>,
    pub tokens: Vec<String>,
}

pub(super) async fn load_inputs(data_dir: &Path) -> Result<Inputs> {
    let credentials = read_lines("credentials", &data_dir.join("credentials.txt")).await?;
    let proxies = read_lines("proxies", &data_dir.join("proxies.txt")).await?;
    // Tokens are optional; a missing file just means no token field.
    let tokens_path = data_dir.join("tokens.txt");
    let tokens = if tokens_path.exists() {
        read_lines("tokens", &tokens_path).await?
    } else {
        tracing::debug!("no tokens.txt, token field left empty");
        Vec::new()
    };
    Ok(Inputs {
        credentials,
        proxies,
        tokens,
    })
}

pub(super) fn plan(cfg: &AbrConfig, inputs: &Inputs) -> Result<Vec<AccountSpec>> {
    let specs = plan_accounts(
        &inputs.credentials,
        &inputs.proxies,
        &inputs.tokens,
        cfg.account_range,
    )?;
    if specs.is_empty() {
        bail!("no accounts selected; check credentials.txt and account_range");
    }
    Ok(specs)
}

pub async fn run_batch(
    cfg: &AbrConfig,
    data_dir: &Path,
    threads_override: Option<usize>,
) -> Result<()> {
    let inputs = load_inputs(data_dir).await?;
    let specs = plan(cfg, &inputs)?;

    let threads = threads_override.unwrap_or(cfg.threads);
    if threads == 0 {
        bail!("--threads must be at least 1");
    }

    let retry = RetryPolicy::new(cfg.attempts, cfg.pause_between_attempts)?;
    let reporter = Reporter::new(data_dir);

    let first = specs.first().map(|s| s.index).unwrap_or(1);
    let last = specs.last().map(|s| s.index).unwrap_or(first);
    tracing::info!(
        "starting accounts {first} to {last} with up to {threads} in flight"
    );

    let jobs: Vec<_> = specs
        .into_iter()
        .map(|spec| {
            let ops = Preflight::new(&spec);
            AccountJob::new(
                spec,
                ops,
                retry,
                cfg.pause_between_accounts,
                reporter.clone(),
            )
            .run()
        })
        .collect();

    let results = run_bounded(jobs, threads).await?;

    let succeeded = results
        .iter()
        .filter(|s| **s == JobStatus::Success)
        .count();
    let failed = results.len() - succeeded;
    tracing::info!("run completed: {succeeded} succeeded, {failed} failed");
    println!(
        "{} account(s) processed: {} succeeded, {} failed",
        results.len(),
        succeeded,
        failed
    );
    Ok(())
}
