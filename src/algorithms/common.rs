use crate::algorithms::a_star::AStar;
use crate::algorithms::dijkstra::Dijkstra;
use crate::error::SearchError;
use crate::grid::{GridMap, Position};
use std::fmt;

/// Which frontier ordering a search uses. Read once when a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    AStar,
    Dijkstra,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::AStar, Mode::Dijkstra];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::AStar => write!(f, "a_star"),
            Mode::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Engine lifecycle. A search request moves the engine out of `Idle`; it
/// always ends in one of the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running,
    Succeeded,
    Exhausted,
}

/// Terminal outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// The frontier ran dry before the goal was closed.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub mode: Mode,
    pub source: Position,
    pub goal: Position,
    pub outcome: Outcome,
    /// Positions in the order they were expanded.
    pub visitation_trace: Vec<Position>,
    /// Source to goal inclusive, empty when the goal is unreachable.
    pub path: Vec<Position>,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    fn mode(&self) -> Mode;

    fn search(
        &mut self,
        grid: &dyn GridMap,
        source: Position,
        goal: Position,
    ) -> Result<SearchResult, SearchError>;

    /// Searches between the grid's own anchors.
    fn search_anchors(&mut self, grid: &dyn GridMap) -> Result<SearchResult, SearchError> {
        self.search(grid, grid.source(), grid.goal())
    }
}

pub fn create_algorithm(mode: Mode) -> Box<dyn PathfindingAlgorithm> {
    match mode {
        Mode::AStar => Box::new(AStar::new()),
        Mode::Dijkstra => Box::new(Dijkstra::new()),
    }
}
