//! `abr config` – print the effective configuration.

use anyhow::Result;

use abr_core::config::{self, AbrConfig};

pub fn run_show_config(cfg: &AbrConfig) -> Result<()> {
    if let Ok(path) = config::config_path() {
        println!("# {}", path.display());
    }
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
