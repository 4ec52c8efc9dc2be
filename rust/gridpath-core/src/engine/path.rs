use crate::grid::Grid;
use crate::models::Coord;

use super::context::SearchContext;

/// Walk predecessor links back from `terminal`, returning the route in
/// start→goal order. A cell with no predecessor (the start) yields an empty
/// route. The walk is capped at the number of cells.
pub fn reconstruct(grid: &Grid, ctx: &SearchContext, terminal: usize) -> Vec<Coord> {
    if ctx.state(terminal).predecessor.is_none() {
        return Vec::new();
    }
    let mut path = vec![grid.coord_of(terminal)];
    let mut cur = terminal;
    while let Some(prev) = ctx.state(cur).predecessor {
        if path.len() > ctx.len() {
            tracing::error!(terminal = %grid.coord_of(terminal), "predecessor chain does not terminate");
            break;
        }
        path.push(grid.coord_of(prev));
        cur = prev;
    }
    path.reverse();
    path
}

/// Sum of terrain costs over every cell of `path`, endpoints included.
pub fn path_cost(grid: &Grid, path: &[Coord]) -> u64 {
    path.iter()
        .filter_map(|&c| grid.terrain_cost(c).ok())
        .map(u64::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::grid;

    #[test]
    fn follows_links_back_to_the_root() {
        let g = grid(vec![vec![1, 2, 3]], (0, 0), (0, 2));
        let mut ctx = SearchContext::new(g.len());
        ctx.state_mut(1).predecessor = Some(0);
        ctx.state_mut(2).predecessor = Some(1);
        let path = reconstruct(&g, &ctx, 2);
        assert_eq!(path, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        assert_eq!(path_cost(&g, &path), 6);
    }

    #[test]
    fn start_cell_yields_empty_route() {
        let g = grid(vec![vec![1, 1]], (0, 0), (0, 1));
        let ctx = SearchContext::new(g.len());
        assert!(reconstruct(&g, &ctx, 0).is_empty());
    }

    #[test]
    fn cyclic_links_terminate() {
        let g = grid(vec![vec![1, 1]], (0, 0), (0, 1));
        let mut ctx = SearchContext::new(g.len());
        ctx.state_mut(0).predecessor = Some(1);
        ctx.state_mut(1).predecessor = Some(0);
        let path = reconstruct(&g, &ctx, 1);
        assert!(path.len() <= ctx.len() + 1);
    }
}
