pub mod astar;
pub mod best_first;
pub mod clock;
pub mod context;
pub mod heuristics;
pub mod iddfs;
pub mod neighbors;
pub mod path;

pub use astar::AStar;
pub use best_first::BestFirst;
pub use clock::Deadline;
pub use context::{CellState, SearchContext};
pub use heuristics::manhattan;
pub use iddfs::IterativeDeepening;
pub use neighbors::SuccessorGenerator;
pub use path::{path_cost, reconstruct};

use crate::grid::{Grid, GridError};
use crate::models::{Coord, DepthLevel, SearchRun, Strategy, TerminationReason};

/// One traversal strategy. Implementations own no search state between calls;
/// everything mutable lives in the supplied [`SearchContext`].
pub trait SearchStrategy {
    fn kind(&self) -> Strategy;

    fn search(&self, grid: &Grid, ctx: &mut SearchContext, deadline: &Deadline) -> Result<SearchRun, GridError>;
}

/// Metrics accumulated while a strategy runs.
#[derive(Clone, Debug, Default)]
pub(crate) struct Tally {
    pub nodes_expanded: u64,
    pub peak_frontier: usize,
    pub levels: Vec<DepthLevel>,
}

impl Tally {
    #[inline]
    pub fn expand(&mut self) { self.nodes_expanded += 1; }

    #[inline]
    pub fn observe(&mut self, frontier_len: usize) {
        if frontier_len > self.peak_frontier { self.peak_frontier = frontier_len; }
    }

    pub fn found(self, strategy: Strategy, path: Vec<Coord>, total_cost: u64, deadline: &Deadline) -> SearchRun {
        SearchRun {
            strategy,
            path_found: true,
            path,
            total_cost,
            nodes_expanded: self.nodes_expanded,
            peak_frontier: self.peak_frontier,
            elapsed_ms: deadline.elapsed_ms(),
            termination: TerminationReason::GoalReached,
            levels: self.levels,
        }
    }

    pub fn stopped(self, strategy: Strategy, reason: TerminationReason, deadline: &Deadline) -> SearchRun {
        SearchRun {
            strategy,
            path_found: false,
            path: Vec::new(),
            total_cost: 0,
            nodes_expanded: self.nodes_expanded,
            peak_frontier: self.peak_frontier,
            elapsed_ms: deadline.elapsed_ms(),
            termination: reason,
            levels: self.levels,
        }
    }
}

/// Reset `ctx` for a new invocation, then settle runs that need no frontier:
/// an impassable endpoint, or start == goal. The latter is still counted and
/// deadline-checked like any first pop.
pub(crate) fn settle_trivial(grid: &Grid, ctx: &mut SearchContext, strategy: Strategy, deadline: &Deadline) -> Result<Option<SearchRun>, GridError> {
    ctx.reset(grid.len());
    let start = grid.cell(grid.start())?;
    let goal = grid.cell(grid.goal())?;
    if start.is_impasse() || goal.is_impasse() {
        tracing::info!(%strategy, start = %start.coord, goal = %goal.coord, "endpoint is an impasse");
        return Ok(Some(Tally::default().stopped(strategy, TerminationReason::FrontierExhausted, deadline)));
    }
    if start.coord == goal.coord {
        ctx.mark_visited(grid.index(start.coord)?);
        let mut tally = Tally::default();
        tally.expand();
        tally.observe(1);
        if deadline.expired() {
            return Ok(Some(finish_expired(strategy, tally, deadline)));
        }
        return Ok(Some(tally.found(strategy, vec![start.coord], u64::from(start.terrain_cost), deadline)));
    }
    Ok(None)
}

/// Finish a successful search: rebuild the route from `goal` and price it.
pub(crate) fn finish_found(grid: &Grid, ctx: &SearchContext, goal: usize, strategy: Strategy, tally: Tally, deadline: &Deadline) -> SearchRun {
    let path = reconstruct(grid, ctx, goal);
    let cost = path_cost(grid, &path);
    tracing::info!(%strategy, cost, nodes = tally.nodes_expanded, steps = path.len(), "goal reached");
    tally.found(strategy, path, cost, deadline)
}

/// Stop on budget overrun, keeping the partial metrics.
pub(crate) fn finish_expired(strategy: Strategy, tally: Tally, deadline: &Deadline) -> SearchRun {
    tracing::warn!(%strategy, budget_ms = deadline.budget_ms(), nodes = tally.nodes_expanded, "time limit exceeded");
    tally.stopped(strategy, TerminationReason::DeadlineExceeded, deadline)
}

pub(crate) fn finish_exhausted(strategy: Strategy, tally: Tally, deadline: &Deadline) -> SearchRun {
    tracing::info!(%strategy, nodes = tally.nodes_expanded, "frontier exhausted without reaching goal");
    tally.stopped(strategy, TerminationReason::FrontierExhausted, deadline)
}
