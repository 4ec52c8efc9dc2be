//! Terrain map reader.
//!
//! Layout, one record per line:
//!
//! ```text
//! <rows> <cols>
//! <start_row> <start_col>
//! <goal_row> <goal_col>
//! <cost> <cost> ...      (one line per grid row, 0 = impassable)
//! ```
//!
//! Blank lines after the header are skipped.

use std::fs;
use std::path::Path;

use gridpath_core::{Coord, Grid, GridError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("missing {0} line")]
    MissingHeader(&'static str),
    #[error("line {line}: expected {expected} values, found {found}")]
    FieldCount { line: usize, expected: usize, found: usize },
    #[error("line {line}: invalid number {token:?}")]
    BadToken { line: usize, token: String },
    #[error("expected {expected} grid rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub fn load_map(path: impl AsRef<Path>) -> Result<Grid, MapFileError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

pub fn parse_map(text: &str) -> Result<Grid, MapFileError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let mut header = |what: &'static str| -> Result<(usize, usize), MapFileError> {
        let (line, raw) = lines.next().ok_or(MapFileError::MissingHeader(what))?;
        let values = numbers::<usize>(line, raw)?;
        match values[..] {
            [a, b] => Ok((a, b)),
            _ => Err(MapFileError::FieldCount { line, expected: 2, found: values.len() }),
        }
    };
    let (rows, cols) = header("size")?;
    let start = Coord::from(header("start")?);
    let goal = Coord::from(header("goal")?);

    let mut costs: Vec<Vec<u32>> = Vec::new();
    for (line, raw) in lines {
        if raw.trim().is_empty() {
            continue;
        }
        let values = numbers::<u32>(line, raw)?;
        if values.len() != cols {
            return Err(MapFileError::FieldCount { line, expected: cols, found: values.len() });
        }
        costs.push(values);
    }
    if costs.len() != rows {
        return Err(MapFileError::RowCount { expected: rows, found: costs.len() });
    }

    let grid = Grid::from_rows(costs, start, goal)?;
    tracing::debug!(rows, cols, start = %start, goal = %goal, impasses = grid.impasses().count(), "map loaded");
    Ok(grid)
}

fn numbers<T: std::str::FromStr>(line: usize, raw: &str) -> Result<Vec<T>, MapFileError> {
    raw.split_whitespace()
        .map(|tok| tok.parse::<T>().map_err(|_| MapFileError::BadToken { line, token: tok.to_string() }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 3\n0 0\n2 2\n1 1 1\n0 0 1\n1 1 1\n";

    #[test]
    fn parses_header_and_rows() {
        let g = parse_map(SAMPLE).unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 3));
        assert_eq!(g.start(), Coord::new(0, 0));
        assert_eq!(g.goal(), Coord::new(2, 2));
        assert_eq!(g.impasses().collect::<Vec<_>>(), vec![Coord::new(1, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn tolerates_trailing_blank_lines_and_extra_spaces() {
        let g = parse_map("1 2\n0 0\n0 1\n  4   5 \n\n\n").unwrap();
        assert_eq!(g.row_costs(0), Some(&[4, 5][..]));
    }

    #[test]
    fn reports_bad_tokens_with_line_numbers() {
        let err = parse_map("2 2\n0 0\n1 1\n1 x\n1 1\n").unwrap_err();
        assert!(matches!(err, MapFileError::BadToken { line: 4, ref token } if token == "x"));
        let neg = parse_map("1 1\n0 0\n0 0\n-1\n").unwrap_err();
        assert!(matches!(neg, MapFileError::BadToken { line: 4, .. }));
    }

    #[test]
    fn reports_shape_problems() {
        assert!(matches!(parse_map("2 2\n0 0\n"), Err(MapFileError::MissingHeader("goal"))));
        assert!(matches!(
            parse_map("2 2 2\n0 0\n1 1\n"),
            Err(MapFileError::FieldCount { line: 1, expected: 2, found: 3 })
        ));
        assert!(matches!(
            parse_map("2 2\n0 0\n1 1\n1 1 1\n1 1\n"),
            Err(MapFileError::FieldCount { line: 4, expected: 2, found: 3 })
        ));
        assert!(matches!(
            parse_map("2 2\n0 0\n1 1\n1 1\n"),
            Err(MapFileError::RowCount { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn huge_header_dimensions_fail_without_allocating() {
        let err = parse_map("18446744073709551615 1\n0 0\n0 0\n1\n").unwrap_err();
        assert!(matches!(err, MapFileError::RowCount { expected: usize::MAX, found: 1 }));
    }

    #[test]
    fn endpoints_outside_the_grid_are_grid_errors() {
        let err = parse_map("1 1\n0 0\n0 4\n1\n").unwrap_err();
        assert!(matches!(err, MapFileError::Grid(GridError::OutOfBounds { .. })));
    }
}
