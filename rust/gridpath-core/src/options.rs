use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

pub const DEFAULT_BUDGET_MS: u64 = 180_000; // three minutes, shared by every strategy

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Wall-clock budget for one strategy invocation.
    pub budget_ms: u64,
    /// Deepest limit tried by iterative deepening; `None` means one per cell.
    pub max_depth: Option<u32>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { budget_ms: DEFAULT_BUDGET_MS, max_depth: None }
    }
}

impl SearchOptions {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }

    pub fn depth_limit(&self, grid: &Grid) -> u32 {
        self.max_depth
            .unwrap_or_else(|| u32::try_from(grid.len()).unwrap_or(u32::MAX))
    }
}
