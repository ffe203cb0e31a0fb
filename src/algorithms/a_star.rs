use crate::algorithms::best_first::BestFirstSearch;
use crate::algorithms::common::{Mode, PathfindingAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::grid::{GridMap, Position};

/// A* with a Manhattan heuristic and a small tie-breaking factor.
#[derive(Default)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* algorithm provider.
    pub fn new() -> Self {
        AStar
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn mode(&self) -> Mode {
        Mode::AStar
    }

    /// Finds a path from `source` to `goal`, expanding nodes in order of
    /// `g + h`.
    ///
    /// # Returns
    ///
    /// The visitation trace and path, or an error if either anchor is off
    /// the grid or on an obstacle.
    fn search(
        &mut self,
        grid: &dyn GridMap,
        source: Position,
        goal: Position,
    ) -> Result<SearchResult, SearchError> {
        BestFirstSearch::new(Mode::AStar).run(grid, source, goal)
    }
}
