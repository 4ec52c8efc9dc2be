use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coord { fn from(t: (usize, usize)) -> Self { Coord { row: t.0, col: t.1 } } }

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BestFirst,
    IterativeDeepening,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BestFirst, Strategy::IterativeDeepening, Strategy::AStar];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BestFirst => "best-first",
            Strategy::IterativeDeepening => "iterative-deepening",
            Strategy::AStar => "a-star",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    GoalReached,
    FrontierExhausted,
    DeadlineExceeded,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TerminationReason::GoalReached => "goal reached",
            TerminationReason::FrontierExhausted => "frontier exhausted",
            TerminationReason::DeadlineExceeded => "deadline exceeded",
        })
    }
}

/// Expansion count of one depth-limited pass of iterative deepening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub limit: u32,
    pub nodes_expanded: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchRun {
    pub strategy: Strategy,
    pub path_found: bool,
    pub path: Vec<Coord>,
    pub total_cost: u64,
    pub nodes_expanded: u64,
    pub peak_frontier: usize,
    pub elapsed_ms: u64,
    pub termination: TerminationReason,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<DepthLevel>,
}

impl SearchRun {
    pub fn reached_goal(&self) -> bool { self.termination == TerminationReason::GoalReached }
}
