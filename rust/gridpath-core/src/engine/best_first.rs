use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::grid::{Grid, GridError};
use crate::models::{SearchRun, Strategy};

use super::clock::Deadline;
use super::context::SearchContext;
use super::neighbors::SuccessorGenerator;
use super::{finish_exhausted, finish_expired, finish_found, settle_trivial, SearchStrategy, Tally};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueNode {
    cost: u32,
    seq: u64,
    index: usize,
}

impl PartialOrd for QueueNode { fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) } }
impl Ord for QueueNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on the cell's own terrain cost; equal costs pop in insertion order.
        (other.cost, other.seq).cmp(&(self.cost, self.seq))
    }
}

/// Best-first traversal ordered by each cell's own terrain cost, not by path
/// cost or distance to the goal. A cell is marked visited when enqueued and is
/// never enqueued twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFirst;

impl SearchStrategy for BestFirst {
    fn kind(&self) -> Strategy { Strategy::BestFirst }

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

        ctx.mark_visited(start);
        open.push(QueueNode { cost: grid.cost_at(start), seq, index: start });
        tally.expand();
        tally.observe(open.len());

        while let Some(QueueNode { index: u, .. }) = open.pop() {
            if deadline.expired() {
                return Ok(finish_expired(kind, tally, deadline));
            }
            if u == goal {
                return Ok(finish_found(grid, ctx, u, kind, tally, deadline));
            }
            for &v in succ.expand(ctx, u)? {
                if ctx.mark_visited(v) {
                    ctx.state_mut(v).predecessor = Some(u);
                    seq += 1;
                    open.push(QueueNode { cost: grid.cost_at(v), seq, index: v });
                    tally.expand();
                }
            }
            tally.observe(open.len());
            debug!(at = %grid.coord_of(u), frontier = open.len(), "expanded");
        }

        Ok(finish_exhausted(kind, tally, deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{grid, open3, pocketed4, visited_cells, walled3};
    use crate::models::{Coord, TerminationReason};
    use std::time::Duration;

    fn run(g: &Grid) -> SearchRun {
        let mut ctx = SearchContext::new(g.len());
        BestFirst.search(g, &mut ctx, &Deadline::start(Duration::from_secs(60))).unwrap()
    }

    #[test]
    fn queue_pops_cheapest_terrain_then_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueNode { cost: 5, seq: 0, index: 0 });
        heap.push(QueueNode { cost: 1, seq: 1, index: 1 });
        heap.push(QueueNode { cost: 1, seq: 2, index: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|n| n.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn open_grid_reaches_goal_with_five_cells() {
        let g = open3();
        let r = run(&g);
        assert_eq!(r.termination, TerminationReason::GoalReached);
        assert_eq!(r.path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(r.path.last(), Some(&Coord::new(2, 2)));
        assert_eq!(r.path.len(), 5);
        assert_eq!(r.total_cost, 5);
    }

    #[test]
    fn walled_grid_exhausts_frontier() {
        let r = run(&walled3());
        assert_eq!(r.termination, TerminationReason::FrontierExhausted);
        assert!(!r.path_found);
        // start plus the two reachable cells of the top row
        assert_eq!(r.nodes_expanded, 3);
    }

    #[test]
    fn prefers_cheap_terrain_over_short_routes() {
        // The expensive column below the start is avoided while cheap cells remain.
        let g = grid(
            vec![vec![1, 1, 1], vec![9, 9, 1], vec![1, 1, 1]],
            (0, 0),
            (2, 0),
        );
        let r = run(&g);
        assert!(r.reached_goal());
        assert!(r.path.contains(&Coord::new(1, 2)));
        assert!(!r.path.contains(&Coord::new(1, 0)));
    }

    #[test]
    fn counts_each_reached_cell_once() {
        let g = pocketed4();
        let mut ctx = SearchContext::new(g.len());
        let r = BestFirst.search(&g, &mut ctx, &Deadline::start(Duration::from_secs(60))).unwrap();
        assert!(r.reached_goal());
        assert_eq!(r.nodes_expanded, visited_cells(&ctx));
        // Top row and right column; nothing inside the pocket.
        assert_eq!(r.nodes_expanded, 7);
    }

    #[test]
    fn peak_frontier_is_the_largest_queue() {
        let open = run(&open3());
        assert_eq!(open.peak_frontier, 3);
        assert_eq!(open.nodes_expanded, 9);
        assert_eq!(run(&walled3()).peak_frontier, 1);
    }
}
