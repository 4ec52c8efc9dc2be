//! Rectangular terrain map.
//!
//! Cells are stored row-major; a cell index is `row * cols + col`. A terrain
//! cost of `0` marks an impasse.

use serde::Serialize;
use thiserror::Error;

use crate::models::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    #[error("grid has no cells")]
    Empty,
    #[error("expected {expected} cost values, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("{rows}x{cols} grid does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub dr: isize,
    pub dc: isize,
}

pub const NORTH: Step = Step { name: "north", dr: -1, dc: 0 };
pub const SOUTH: Step = Step { name: "south", dr: 1, dc: 0 };
pub const WEST: Step = Step { name: "west", dr: 0, dc: -1 };
pub const EAST: Step = Step { name: "east", dr: 0, dc: 1 };

// Successors are always offered in this order.
pub const STEP_ORDER: [Step; 4] = [NORTH, SOUTH, WEST, EAST];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub coord: Coord,
    pub terrain_cost: u32,
}

impl Cell {
    pub fn is_impasse(&self) -> bool { self.terrain_cost == 0 }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    costs: Vec<u32>,
    start: Coord,
    goal: Coord,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, costs: Vec<u32>, start: Coord, goal: Coord) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })?;
        if costs.len() != expected {
            return Err(GridError::ShapeMismatch { expected, found: costs.len() });
        }
        let grid = Grid { rows, cols, costs, start, goal };
        grid.index(start)?;
        grid.index(goal)?;
        Ok(grid)
    }

    /// Build from one cost vector per row; every row must have the width of the first.
    pub fn from_rows(rows: Vec<Vec<u32>>, start: Coord, goal: Coord) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let height = rows.len();
        let mut costs = Vec::new();
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRow { row, expected: cols, found: values.len() });
            }
            costs.extend(values);
        }
        Grid::new(height, cols, costs, start, goal)
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn len(&self) -> usize { self.costs.len() }
    pub fn is_empty(&self) -> bool { self.costs.is_empty() }
    pub fn start(&self) -> Coord { self.start }
    pub fn goal(&self) -> Coord { self.goal }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.in_bounds(coord) {
            return Err(GridError::OutOfBounds { coord, rows: self.rows, cols: self.cols });
        }
        Ok(coord.row * self.cols + coord.col)
    }

    /// Inverse of [`Grid::index`]. `index` must be below `len()`.
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }

    pub fn cell(&self, coord: Coord) -> Result<Cell, GridError> {
        let i = self.index(coord)?;
        Ok(Cell { coord, terrain_cost: self.costs[i] })
    }

    pub fn terrain_cost(&self, coord: Coord) -> Result<u32, GridError> {
        Ok(self.costs[self.index(coord)?])
    }

    pub fn is_passable(&self, coord: Coord) -> Result<bool, GridError> {
        Ok(self.terrain_cost(coord)? != 0)
    }

    #[inline]
    pub(crate) fn cost_at(&self, index: usize) -> u32 {
        self.costs[index]
    }

    /// In-bounds orthogonal neighbours of `coord`, in [`STEP_ORDER`].
    /// Passability is not checked here.
    pub fn neighbors_of(&self, coord: Coord) -> Result<impl Iterator<Item = Coord> + '_, GridError> {
        self.index(coord)?;
        Ok(STEP_ORDER.iter().filter_map(move |s| self.offset(coord, s)))
    }

    fn offset(&self, coord: Coord, step: &Step) -> Option<Coord> {
        let row = coord.row.checked_add_signed(step.dr)?;
        let col = coord.col.checked_add_signed(step.dc)?;
        let next = Coord::new(row, col);
        self.in_bounds(next).then_some(next)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.costs.iter().enumerate().map(move |(i, &terrain_cost)| Cell { coord: self.coord_of(i), terrain_cost })
    }

    pub fn impasses(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().filter(Cell::is_impasse).map(|c| c.coord)
    }

    pub fn row_costs(&self, row: usize) -> Option<&[u32]> {
        (row < self.rows).then(|| &self.costs[row * self.cols..(row + 1) * self.cols])
    }
}
