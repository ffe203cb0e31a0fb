use crate::algorithms::best_first::BestFirstSearch;
use crate::algorithms::common::{Mode, PathfindingAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::grid::{GridMap, Position};

/// Uniform-cost search: frontier ordered by accumulated cost alone.
#[derive(Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl PathfindingAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn mode(&self) -> Mode {
        Mode::Dijkstra
    }

    fn search(
        &mut self,
        grid: &dyn GridMap,
        source: Position,
        goal: Position,
    ) -> Result<SearchResult, SearchError> {
        BestFirstSearch::new(Mode::Dijkstra).run(grid, source, goal)
    }
}
