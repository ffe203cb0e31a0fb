use crate::algorithms::common::{Mode, Outcome, SearchResult, SearchState};
use crate::algorithms::node::{FrontierEntry, Priority, SearchNode};
use crate::error::SearchError;
use crate::grid::{GridMap, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BinaryHeap;

/// Best-first search over a 4-connected unit-cost grid.
///
/// One engine serves both algorithms; the [`Mode`] only changes how frontier
/// keys are computed. Every call to [`BestFirstSearch::run`] starts from
/// empty bookkeeping and runs until the goal is closed or the frontier is
/// empty. The grid is only read.
pub struct BestFirstSearch {
    mode: Mode,
    state: SearchState,
    frontier: BinaryHeap<FrontierEntry>,
    // Latest stamp per position still waiting in the frontier.
    open: FxHashMap<Position, u64>,
    costs: FxHashMap<Position, u32>,
    parents: FxHashMap<Position, Option<Position>>,
    closed: FxHashSet<Position>,
    next_stamp: u64,
}

impl BestFirstSearch {
    pub fn new(mode: Mode) -> Self {
        BestFirstSearch {
            mode,
            state: SearchState::Idle,
            frontier: BinaryHeap::new(),
            open: FxHashMap::default(),
            costs: FxHashMap::default(),
            parents: FxHashMap::default(),
            closed: FxHashSet::default(),
            next_stamp: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Rejects anchors that are off the grid or sitting on an obstacle.
    pub fn validate<G: GridMap + ?Sized>(
        grid: &G,
        source: Position,
        goal: Position,
    ) -> Result<(), SearchError> {
        if !grid.in_bounds(source.x, source.y) {
            return Err(SearchError::SourceOutOfBounds(source));
        }
        if !grid.in_bounds(goal.x, goal.y) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }
        if grid.is_obstacle(source.x, source.y) {
            return Err(SearchError::SourceBlocked(source));
        }
        if grid.is_obstacle(goal.x, goal.y) {
            return Err(SearchError::GoalBlocked(goal));
        }
        Ok(())
    }

    pub fn run<G: GridMap + ?Sized>(
        &mut self,
        grid: &G,
        source: Position,
        goal: Position,
    ) -> Result<SearchResult, SearchError> {
        Self::validate(grid, source, goal)?;

        self.reset();
        self.state = SearchState::Running;
        let priority = Priority::new(self.mode, grid.width(), grid.height());
        log::debug!(
            "{} search from {} to {} on {}x{} grid",
            priority.mode(),
            source,
            goal,
            grid.width(),
            grid.height()
        );

        self.costs.insert(source, 0);
        self.parents.insert(source, None);
        self.push(SearchNode::new(source, 0, source.manhattan(goal)), &priority);

        let mut visitation_trace = Vec::new();
        while !self.closed.contains(&goal) {
            let Some(current) = self.pop() else {
                break;
            };
            visitation_trace.push(current.pos);
            self.closed.insert(current.pos);

            for next in current.pos.neighbors() {
                if !grid.is_passable(next.x, next.y) || self.closed.contains(&next) {
                    continue;
                }
                let tentative_g = current.g + 1;
                let improves = self
                    .costs
                    .get(&next)
                    .map_or(true, |&known| tentative_g < known);
                if !improves {
                    continue;
                }
                self.costs.insert(next, tentative_g);
                self.parents.insert(next, Some(current.pos));
                self.push(
                    SearchNode::new(next, tentative_g, next.manhattan(goal)),
                    &priority,
                );
            }
        }

        let path = if self.closed.contains(&goal) {
            self.reconstruct(source, goal)
        } else {
            None
        };
        let (outcome, path) = match path {
            Some(path) => (Outcome::Succeeded, path),
            None => (Outcome::Exhausted, Vec::new()),
        };
        self.state = match outcome {
            Outcome::Succeeded => SearchState::Succeeded,
            Outcome::Exhausted => SearchState::Exhausted,
        };
        log::debug!(
            "{} search finished: {:?}, {} expanded, path of {} cells",
            self.mode,
            outcome,
            visitation_trace.len(),
            path.len()
        );

        Ok(SearchResult {
            mode: self.mode,
            source,
            goal,
            outcome,
            visitation_trace,
            path,
        })
    }

    fn reset(&mut self) {
        self.frontier.clear();
        self.open.clear();
        self.costs.clear();
        self.parents.clear();
        self.closed.clear();
        self.next_stamp = 0;
        self.state = SearchState::Idle;
    }

    /// Inserts `node`, or moves it if it is already waiting. The older heap
    /// entry stays behind and is dropped when popped.
    fn push(&mut self, node: SearchNode, priority: &Priority) {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.open.insert(node.pos, stamp);
        self.frontier.push(FrontierEntry {
            key: priority.key(&node),
            node,
            stamp,
        });
    }

    fn pop(&mut self) -> Option<SearchNode> {
        while let Some(entry) = self.frontier.pop() {
            if self.open.get(&entry.node.pos) == Some(&entry.stamp) {
                self.open.remove(&entry.node.pos);
                return Some(entry.node);
            }
        }
        None
    }

    /// Walks parent links back from `goal`. `None` if the chain does not end
    /// at `source`.
    fn reconstruct(&self, source: Position, goal: Position) -> Option<Vec<Position>> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&Some(previous)) = self.parents.get(&current) {
            path.push(previous);
            current = previous;
            if path.len() > self.parents.len() {
                return None;
            }
        }
        if current != source {
            return None;
        }
        path.reverse();
        Some(path)
    }
}

/// Runs a single search with fresh bookkeeping.
pub fn search<G: GridMap + ?Sized>(
    grid: &G,
    mode: Mode,
    source: Position,
    goal: Position,
) -> Result<SearchResult, SearchError> {
    BestFirstSearch::new(mode).run(grid, source, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Board;

    fn open_board() -> Board {
        Board::with_anchors(5, 5, Position::new(0, 0), Position::new(4, 4))
    }

    #[test]
    fn state_moves_from_idle_to_terminal() {
        let board = open_board();
        let mut engine = BestFirstSearch::new(Mode::AStar);
        assert_eq!(engine.state(), SearchState::Idle);
        engine.run(&board, board.source(), board.goal()).unwrap();
        assert_eq!(engine.state(), SearchState::Succeeded);
    }

    #[test]
    fn exhausted_state_when_goal_sealed() {
        let mut board = open_board();
        board.set_wall(Position::new(3, 4));
        board.set_wall(Position::new(4, 3));
        let mut engine = BestFirstSearch::new(Mode::Dijkstra);
        let result = engine.run(&board, board.source(), board.goal()).unwrap();
        assert_eq!(engine.state(), SearchState::Exhausted);
        assert_eq!(result.outcome, Outcome::Exhausted);
        assert!(result.path.is_empty());
        // Everything except the goal and the two walls.
        assert_eq!(result.visitation_trace.len(), 22);
    }

    #[test]
    fn rejects_bad_anchors_without_running() {
        let mut board = open_board();
        board.set_wall(Position::new(2, 2));
        let mut engine = BestFirstSearch::new(Mode::AStar);

        let err = engine.run(&board, Position::new(-1, 0), board.goal());
        assert_eq!(err, Err(SearchError::SourceOutOfBounds(Position::new(-1, 0))));
        let err = engine.run(&board, board.source(), Position::new(5, 0));
        assert_eq!(err, Err(SearchError::GoalOutOfBounds(Position::new(5, 0))));
        let err = engine.run(&board, Position::new(2, 2), board.goal());
        assert_eq!(err, Err(SearchError::SourceBlocked(Position::new(2, 2))));
        let err = engine.run(&board, board.source(), Position::new(2, 2));
        assert_eq!(err, Err(SearchError::GoalBlocked(Position::new(2, 2))));
        assert_eq!(engine.state(), SearchState::Idle);
    }

    #[test]
    fn engine_is_reusable_between_runs() {
        let board = open_board();
        let mut engine = BestFirstSearch::new(Mode::AStar);
        let first = engine.run(&board, board.source(), board.goal()).unwrap();
        let second = engine.run(&board, board.source(), board.goal()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn source_is_expanded_first() {
        let board = Board::with_anchors(3, 3, Position::new(1, 1), Position::new(2, 2));
        let result = search(&board, Mode::Dijkstra, board.source(), board.goal()).unwrap();
        assert_eq!(result.visitation_trace[0], Position::new(1, 1));
        assert_eq!(result.path.first(), Some(&Position::new(1, 1)));
        assert_eq!(result.path.last(), Some(&Position::new(2, 2)));
        assert_eq!(result.path.len(), 3);
    }

    #[test]
    fn relaxation_finds_shorter_route_around_detour() {
        //  S . . . .
        //  # # # . .
        //  G . . . .
        let mut board = Board::with_anchors(5, 3, Position::new(0, 0), Position::new(0, 2));
        for x in 0..3 {
            board.set_wall(Position::new(x, 1));
        }
        for mode in Mode::ALL {
            let result = search(&board, mode, board.source(), board.goal()).unwrap();
            assert_eq!(result.steps(), Some(8), "{} took a longer route", mode);
        }
    }
}
