use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gridpath_core::SearchOptions;
use serde::Deserialize;

pub const ENV_BUDGET_MS: &str = "GRIDPATH_BUDGET_MS";
pub const ENV_MAX_DEPTH: &str = "GRIDPATH_MAX_DEPTH";
pub const ENV_LOG: &str = "GRIDPATH_LOG";

/// Settings taken from the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub budget_ms: Option<u64>,
    pub max_depth: Option<u32>,
    pub log_filter: Option<String>,
}

/// Partial options read from a JSON file; absent fields fall through to the
/// layer below.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsFile {
    pub budget_ms: Option<u64>,
    pub max_depth: Option<u32>,
}

impl OptionsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading options file {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing options file {}", path.display()))
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let budget_ms = lookup(ENV_BUDGET_MS)
            .map(|s| s.trim().parse::<u64>().with_context(|| format!("{ENV_BUDGET_MS}={s:?} is not a number")))
            .transpose()?;
        let max_depth = lookup(ENV_MAX_DEPTH)
            .map(|s| s.trim().parse::<u32>().with_context(|| format!("{ENV_MAX_DEPTH}={s:?} is not a number")))
            .transpose()?;
        let log_filter = lookup(ENV_LOG).filter(|s| !s.trim().is_empty());
        Ok(Self { budget_ms, max_depth, log_filter })
    }

    /// Layer defaults < environment < options file < command-line flags.
    pub fn resolve(&self, file: Option<&OptionsFile>, budget_flag: Option<u64>, depth_flag: Option<u32>) -> SearchOptions {
        let mut opts = SearchOptions::default();
        let file = file.cloned().unwrap_or_default();
        if let Some(b) = budget_flag.or(file.budget_ms).or(self.budget_ms) {
            opts.budget_ms = b;
        }
        opts.max_depth = depth_flag.or(file.max_depth).or(self.max_depth);
        opts
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}
