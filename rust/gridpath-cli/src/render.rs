use std::fmt::Write;

use gridpath_core::{Coord, Grid, SearchRun};

pub fn format_path(path: &[Coord]) -> String {
    path.iter().map(Coord::to_string).collect::<Vec<_>>().join(" ")
}

/// Start/goal, the cost matrix and every impasse location.
pub fn render_search_space(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "The starting location is: {}", grid.start());
    let _ = writeln!(out, "The goal location is: {}", grid.goal());
    let _ = writeln!(out, "Traversal costs ({}x{}):", grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        if let Some(costs) = grid.row_costs(row) {
            let line: Vec<String> = costs.iter().map(u32::to_string).collect();
            let _ = writeln!(out, "  {}", line.join(" "));
        }
    }
    let impasses: Vec<Coord> = grid.impasses().collect();
    let _ = writeln!(out, "Impasse locations: {}", if impasses.is_empty() { "none".to_string() } else { format_path(&impasses) });
    out
}

pub fn render_run(run: &SearchRun) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", run.strategy);
    let _ = writeln!(out, "Result: {}", run.termination);
    if run.path_found {
        let _ = writeln!(out, "Path: {}", format_path(&run.path));
        let _ = writeln!(out, "Path cost: {}", run.total_cost);
    }
    let _ = writeln!(out, "Nodes expanded: {}", run.nodes_expanded);
    let _ = writeln!(out, "Peak frontier: {}", run.peak_frontier);
    let _ = writeln!(out, "Runtime: {} ms", run.elapsed_ms);
    for level in &run.levels {
        let _ = writeln!(out, "  depth {}: {} nodes expanded", level.limit, level.nodes_expanded);
    }
    out
}
