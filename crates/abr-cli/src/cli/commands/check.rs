//! `abr check` – validate config and inputs without running any account.

use anyhow::Result;
use std::path::Path;

use abr_core::config::AbrConfig;

use super::run::{load_inputs, plan};

pub async fn run_check(cfg: &AbrConfig, data_dir: &Path) -> Result<()> {
    let inputs = load_inputs(data_dir).await?;
    let specs = plan(cfg, &inputs)?;

    let first = specs.first().map(|s| s.index).unwrap_or(0);
    let last = specs.last().map(|s| s.index).unwrap_or(0);
    println!(
        "{} credential(s), {} proxy(ies), {} token(s)",
        inputs.credentials.len(),
        inputs.proxies.len(),
        inputs.tokens.len()
    );
    println!(
        "plan: accounts {first} to {last} ({} job(s)), {} in flight, {} attempt(s) per init",
        specs.len(),
        cfg.threads,
        cfg.attempts
    );
    Ok(())
}
