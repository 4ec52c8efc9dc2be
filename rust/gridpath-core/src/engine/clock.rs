use std::cell::Cell;
use std::time::{Duration, Instant};

/// Wall-clock budget for one strategy invocation. Checked once per frontier pop.
#[derive(Clone, Debug)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
    pops_left: Option<Cell<u64>>,
}

impl Deadline {
    pub fn start(budget: Duration) -> Self {
        Self { started: Instant::now(), budget, pops_left: None }
    }

    /// Like [`Deadline::start`], but also expires once `pops` checks have
    /// passed, whatever the clock says. Gives a deterministic work cap.
    pub fn with_pop_allowance(budget: Duration, pops: u64) -> Self {
        Self { started: Instant::now(), budget, pops_left: Some(Cell::new(pops)) }
    }

    /// Expired once the elapsed time reaches the budget, so a zero budget is
    /// expired at the first check. Each call consumes one pop of the allowance.
    pub fn expired(&self) -> bool {
        if let Some(left) = &self.pops_left {
            match left.get() {
                0 => return true,
                n => left.set(n - 1),
            }
        }
        self.started.elapsed() >= self.budget
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn budget_ms(&self) -> u64 {
        u64::try_from(self.budget.as_millis()).unwrap_or(u64::MAX)
    }
}
