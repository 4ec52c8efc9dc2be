use tracing::info;

use crate::engine::{AStar, BestFirst, Deadline, IterativeDeepening, SearchContext, SearchStrategy};
use crate::grid::{Grid, GridError};
use crate::models::{SearchRun, Strategy};
use crate::options::SearchOptions;

/// Run one strategy on `grid` with a fresh search context.
pub fn run(grid: &Grid, strategy: Strategy, options: &SearchOptions) -> Result<SearchRun, GridError> {
    let mut ctx = SearchContext::new(grid.len());
    run_with_context(grid, strategy, options, &mut ctx)
}

/// Run one strategy reusing `ctx`. The context is reset by the strategy, so a
/// context may be shared by consecutive runs over the same grid.
pub fn run_with_context(
    grid: &Grid,
    strategy: Strategy,
    options: &SearchOptions,
    ctx: &mut SearchContext,
) -> Result<SearchRun, GridError> {
    info!(%strategy, start = %grid.start(), goal = %grid.goal(), budget_ms = options.budget_ms, "starting search");
    // The budget starts ticking here and is shared by every pass of the strategy.
    let deadline = Deadline::start(options.budget());
    let run = match strategy {
        Strategy::BestFirst => BestFirst.search(grid, ctx, &deadline)?,
        Strategy::IterativeDeepening => IterativeDeepening::new(options.depth_limit(grid)).search(grid, ctx, &deadline)?,
        Strategy::AStar => AStar.search(grid, ctx, &deadline)?,
    };
    info!(
        %strategy,
        termination = %run.termination,
        cost = run.total_cost,
        nodes = run.nodes_expanded,
        elapsed_ms = run.elapsed_ms,
        "search finished"
    );
    Ok(run)
}

/// Every strategy in turn, each with its own budget.
pub fn run_all(grid: &Grid, options: &SearchOptions) -> Result<Vec<SearchRun>, GridError> {
    let mut ctx = SearchContext::new(grid.len());
    Strategy::ALL
        .iter()
        .map(|&s| run_with_context(grid, s, options, &mut ctx))
        .collect()
}
