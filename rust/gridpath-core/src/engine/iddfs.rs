use tracing::debug;

use crate::grid::{Grid, GridError};
use crate::models::{DepthLevel, SearchRun, Strategy};

use super::clock::Deadline;
use super::context::SearchContext;
use super::neighbors::SuccessorGenerator;
use super::{finish_exhausted, finish_expired, finish_found, settle_trivial, SearchStrategy, Tally};

/// Result of one depth-limited pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Found { nodes: u64 },
    /// Stack emptied. `cutoff` is set when some branch stopped at the limit.
    Exhausted { nodes: u64, cutoff: bool },
    /// The shared deadline fired; aborts the whole deepening loop.
    Expired { nodes: u64 },
}

/// Depth-first search restarted with limits `0..=max_depth`.
///
/// Each pass has its own visited set and stack, so memory stays proportional
/// to the frontier of one pass while work is repeated across passes.
#[derive(Clone, Copy, Debug)]
pub struct IterativeDeepening {
    pub max_depth: u32,
}

impl IterativeDeepening {
    pub fn new(max_depth: u32) -> Self { Self { max_depth } }

    fn depth_limited(
        &self,
        grid: &Grid,
        ctx: &mut SearchContext,
        succ: &mut SuccessorGenerator<'_>,
        (start, goal): (usize, usize),
        limit: u32,
        deadline: &Deadline,
        tally: &mut Tally,
    ) -> Result<Level, GridError> {
        ctx.reset(grid.len());
        let mut stack = vec![start];
        ctx.mark_visited(start);
        ctx.state_mut(start).depth = 0;
        let mut nodes: u64 = 1;
        let mut cutoff = false;
        tally.observe(stack.len());

        while let Some(u) = stack.pop() {
            if deadline.expired() {
                return Ok(Level::Expired { nodes });
            }
            if u == goal {
                return Ok(Level::Found { nodes });
            }
            let depth = ctx.state(u).depth;
            if depth >= limit {
                // Abandon this branch only; siblings further down the stack still run.
                cutoff = true;
                continue;
            }
            for &v in succ.expand(ctx, u)? {
                if ctx.mark_visited(v) {
                    let st = ctx.state_mut(v);
                    st.depth = depth + 1;
                    st.predecessor = Some(u);
                    stack.push(v);
                    nodes += 1;
                }
            }
            tally.observe(stack.len());
        }
        Ok(Level::Exhausted { nodes, cutoff })
    }
}

impl SearchStrategy for IterativeDeepening {
    fn kind(&self) -> Strategy { Strategy::IterativeDeepening }

    fn search(&self, grid: &Grid, ctx: &mut SearchContext, deadline: &Deadline) -> Result<SearchRun, GridError> {
        let kind = self.kind();
        if let Some(run) = settle_trivial(grid, ctx, kind, deadline)? {
            return Ok(run);
        }
        let ends = (grid.index(grid.start())?, grid.index(grid.goal())?);
        let mut succ = SuccessorGenerator::new(grid);
        let mut tally = Tally::default();

        for limit in 0..=self.max_depth {
            match self.depth_limited(grid, ctx, &mut succ, ends, limit, deadline, &mut tally)? {
                Level::Found { nodes } => {
                    tally.nodes_expanded += nodes;
                    tally.levels.push(DepthLevel { limit, nodes_expanded: nodes });
                    return Ok(finish_found(grid, ctx, ends.1, kind, tally, deadline));
                }
                Level::Expired { nodes } => {
                    tally.nodes_expanded += nodes;
                    return Ok(finish_expired(kind, tally, deadline));
                }
                Level::Exhausted { nodes, cutoff } => {
                    tally.nodes_expanded += nodes;
                    tally.levels.push(DepthLevel { limit, nodes_expanded: nodes });
                    debug!(limit, nodes, cutoff, "depth level exhausted");
                    if !cutoff {
                        // Nothing was held back by the limit: the whole reachable
                        // region has been seen and deeper passes cannot add to it.
                        break;
                    }
                }
            }
        }

        Ok(finish_exhausted(kind, tally, deadline))
    }
}
