use crate::grid::{Grid, GridError};

use super::context::SearchContext;
use super::heuristics::manhattan;

/// Produces the admissible successors of a cell: in-bounds, passable,
/// orthogonal neighbours in north/south/west/east order.
///
/// Each successor has `h` set to its Manhattan distance to the goal and `g`
/// set to `cost(current) + cost(successor)`. That is the sum of the two
/// traversal costs, not the accumulated path cost. Nothing is marked visited.
pub struct SuccessorGenerator<'g> {
    grid: &'g Grid,
    buf: Vec<usize>,
}

impl<'g> SuccessorGenerator<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid, buf: Vec::with_capacity(4) }
    }

    pub fn expand(&mut self, ctx: &mut SearchContext, current: usize) -> Result<&[usize], GridError> {
        self.buf.clear();
        let here = self.grid.coord_of(current);
        let here_cost = u64::from(self.grid.terrain_cost(here)?);
        let goal = self.grid.goal();
        for next in self.grid.neighbors_of(here)? {
            let cost = self.grid.terrain_cost(next)?;
            if cost == 0 { continue; }
            let v = self.grid.index(next)?;
            let st = ctx.state_mut(v);
            st.h = manhattan(next, goal);
            st.g = here_cost + u64::from(cost);
            self.buf.push(v);
        }
        Ok(&self.buf)
    }
}
