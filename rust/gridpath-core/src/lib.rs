pub mod grid;
pub mod models;
pub mod options;
pub mod engine;
pub mod runner;

pub use grid::{Cell, Grid, GridError};
pub use models::{Coord, DepthLevel, SearchRun, Strategy, TerminationReason};
pub use options::{SearchOptions, DEFAULT_BUDGET_MS};
pub use engine::{AStar, BestFirst, Deadline, IterativeDeepening, SearchContext, SearchStrategy};
pub use runner::{run, run_all, run_with_context};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
