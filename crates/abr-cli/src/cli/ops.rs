//! Built-in account ops: an offline preflight of each account's inputs.
//!
//! Platform-specific flows (session login, on-chain actions) plug in by
//! implementing `AccountOps` and swapping this type out in `run_batch`.

use anyhow::Result;
use async_trait::async_trait;

use abr_core::accounts::{AccountSpec, Credential};
use abr_core::job::AccountOps;
use abr_core::retry::Attempt;

pub struct Preflight {
    index: u64,
    credential: Credential,
    proxy: String,
}

impl Preflight {
    pub fn new(spec: &AccountSpec) -> Self {
        Self {
            index: spec.index,
            credential: Credential::parse(&spec.credential),
            proxy: spec.proxy.clone(),
        }
    }
}

fn is_hex_key(key: &str) -> bool {
    match key.strip_prefix("0x") {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[async_trait]
impl AccountOps for Preflight {
    async fn initialize(&self) -> Result<Attempt<()>> {
        if !is_hex_key(&self.credential.main) {
            anyhow::bail!("credential is not a hex key");
        }
        if let Some(secondary) = &self.credential.secondary {
            if !is_hex_key(secondary) {
                anyhow::bail!("secondary credential is not a hex key");
            }
        }
        if self.proxy.is_empty() {
            anyhow::bail!("account has no proxy assigned");
        }
        Ok(Attempt::Success(()))
    }

    async fn execute(&self) -> Result<()> {
        tracing::debug!(account = self.index, "preflight only, no platform flow wired");
        Ok(())
    }
}
