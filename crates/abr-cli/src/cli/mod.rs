//! CLI for the ABR account batch runner.

mod commands;
mod ops;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use abr_core::config::{self, AbrConfig};

use commands::{run_batch, run_check, run_show_config};

/// Top-level CLI for the ABR account batch runner.
#[derive(Debug, Parser)]
#[command(name = "abr")]
#[command(about = "ABR: bounded-concurrency account batch runner", long_about = None)]
pub struct Cli {
    /// Path to an explicit config file (default: ~/.config/abr/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run all selected accounts through the engine.
    Run {
        /// Directory holding credentials.txt / proxies.txt / tokens.txt and
        /// the success/error outcome stores.
        #[arg(long, default_value = "data", value_name = "DIR")]
        data_dir: PathBuf,
        /// Override the configured concurrency ceiling.
        #[arg(long, value_name = "N")]
        threads: Option<usize>,
    },

    /// Validate config and input files without running any account.
    Check {
        /// Directory holding the input files.
        #[arg(long, default_value = "data", value_name = "DIR")]
        data_dir: PathBuf,
    },

    /// Print the effective configuration.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { data_dir, threads } => {
                run_batch(&cfg, &data_dir, threads).await?
            }
            CliCommand::Check { data_dir } => run_check(&cfg, &data_dir).await?,
            CliCommand::Config => run_show_config(&cfg)?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<AbrConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
