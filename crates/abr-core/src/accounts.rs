//! Account input planning: line files, range slicing, proxy cycling.

use anyhow::{Context, Result};
use std::path::Path;

/// Fault while turning input files into a runnable account plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("no proxies available; at least one proxy is required")]
    NoProxies,
    #[error("account_range [{start}, {end}] is out of bounds for {count} credential(s)")]
    RangeOutOfBounds { start: u64, end: u64, count: usize },
}

/// Everything one job needs to identify and report its account. The raw
/// credential line is kept verbatim so outcome records match the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSpec {
    /// 1-based position in the full credential file, used for logging.
    pub index: u64,
    pub credential: String,
    pub proxy: String,
    pub token: String,
}

/// A parsed credential: a main key plus an optional secondary key from a
/// `main:secondary` composite line. Each part gets a `0x` prefix if missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub main: String,
    pub secondary: Option<String>,
}

impl Credential {
    pub fn parse(raw: &str) -> Self {
        fn with_prefix(key: &str) -> String {
            if key.starts_with("0x") {
                key.to_string()
            } else {
                format!("0x{key}")
            }
        }

        match raw.split_once(':') {
            Some((main, secondary)) => Self {
                main: with_prefix(main),
                secondary: Some(with_prefix(secondary)),
            },
            None => Self {
                main: with_prefix(raw),
                secondary: None,
            },
        }
    }
}

/// Reads a line-oriented input file: trims lines, drops empties, logs the
/// count under the given label.
pub async fn read_lines(label: &str, path: &Path) -> Result<Vec<String>> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {} from {}", label, path.display()))?;
    let items: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    tracing::info!("loaded {} {}", items.len(), label);
    Ok(items)
}

/// Builds the per-account job inputs from the raw input lists.
///
/// `range == (0, 0)` selects every credential; otherwise the 1-based
/// inclusive slice `[start, end]`, which must fit the credential count.
/// Proxies are cycled over the selected accounts; tokens are matched by
/// absolute account index, with a missing token becoming an empty string
/// (the reporter skips empty fields).
pub fn plan_accounts(
    credentials: &[String],
    proxies: &[String],
    tokens: &[String],
    range: [u64; 2],
) -> Result<Vec<AccountSpec>, PlanError> {
    if proxies.is_empty() {
        return Err(PlanError::NoProxies);
    }

    let [start, end] = range;
    let (first, selected): (u64, &[String]) = if (start, end) == (0, 0) {
        (1, credentials)
    } else {
        if start == 0 || start > end || end as usize > credentials.len() {
            return Err(PlanError::RangeOutOfBounds {
                start,
                end,
                count: credentials.len(),
            });
        }
        (start, &credentials[start as usize - 1..end as usize])
    };

    let specs = selected
        .iter()
        .enumerate()
        .map(|(i, credential)| {
            let index = first + i as u64;
            AccountSpec {
                index,
                credential: credential.clone(),
                proxy: proxies[i % proxies.len()].clone(),
                token: tokens
                    .get(index as usize - 1)
                    .cloned()
                    .unwrap_or_default(),
            }
        })
        .collect();

    Ok(specs)
}
