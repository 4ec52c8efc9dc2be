use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::grid::{Grid, GridError};
use crate::models::{SearchRun, Strategy};

use super::clock::Deadline;
use super::context::SearchContext;
use super::heuristics::manhattan;
use super::neighbors::SuccessorGenerator;
use super::{finish_exhausted, finish_expired, finish_found, settle_trivial, SearchStrategy, Tally};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueNode {
    f: u64,
    h: u64,
    seq: u64,
    index: usize,
}

impl PartialOrd for QueueNode { fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) } }
impl Ord for QueueNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert for lowest f, then lowest h, then oldest.
        (other.f, other.h, other.seq).cmp(&(self.f, self.h, self.seq))
    }
}

/// Heuristic-guided search ordered by `f = g + h`.
///
/// `g` comes from the successor generator (sum of the two cells' terrain
/// costs), so this is not a shortest-path guarantor. A cell enters the open
/// set once, keyed by its `f` at that moment. Every non-closed successor
/// takes the expanding cell as predecessor, so the last expansion to touch a
/// cell wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar;

impl SearchStrategy for AStar {
    fn kind(&self) -> Strategy { Strategy::AStar }

    fn search(&self, grid: &Grid, ctx: &mut SearchContext, deadline: &Deadline) -> Result<SearchRun, GridError> {
        let kind = self.kind();
        if let Some(run) = settle_trivial(grid, ctx, kind, deadline)? {
            return Ok(run);
        }
        let start = grid.index(grid.start())?;
        let goal = grid.index(grid.goal())?;

        let mut succ = SuccessorGenerator::new(grid);
        let mut tally = Tally::default();
        let mut open = BinaryHeap::new();
        let mut seq: u64 = 0;

        let h0 = manhattan(grid.start(), grid.goal());
        {
            let st = ctx.state_mut(start);
            st.g = 0;
            st.h = h0;
        }
        ctx.mark_visited(start);
        open.push(QueueNode { f: h0, h: h0, seq, index: start });
        tally.expand();
        tally.observe(open.len());

        while let Some(QueueNode { index: u, f, .. }) = open.pop() {
            if deadline.expired() {
                return Ok(finish_expired(kind, tally, deadline));
            }
            if u == goal {
                return Ok(finish_found(grid, ctx, u, kind, tally, deadline));
            }
            ctx.close(u);
            for &v in succ.expand(ctx, u)? {
                if ctx.is_closed(v) {
                    continue;
                }
                if ctx.mark_visited(v) {
                    let st = ctx.state(v);
                    seq += 1;
                    open.push(QueueNode { f: st.f(), h: st.h, seq, index: v });
                    tally.expand();
                }
                ctx.state_mut(v).predecessor = Some(u);
            }
            tally.observe(open.len());
            debug!(at = %grid.coord_of(u), f, open = open.len(), "expanded");
        }

        Ok(finish_exhausted(kind, tally, deadline))
    }
}
