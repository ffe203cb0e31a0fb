use crate::grid::Position;
use thiserror::Error;

/// Reasons a search request is rejected before the search loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("source {0} is outside the grid")]
    SourceOutOfBounds(Position),
    #[error("goal {0} is outside the grid")]
    GoalOutOfBounds(Position),
    #[error("source {0} is on an obstacle")]
    SourceBlocked(Position),
    #[error("goal {0} is on an obstacle")]
    GoalBlocked(Position),
}

/// Failure to read an `x,y` coordinate from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a coordinate of the form `x,y`, got `{0}`")]
pub struct PositionParseError(pub String);

/// Board settings that cannot be turned into a valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a {0}x{1} board has no room for both a source and a goal")]
    TooSmall(usize, usize),
    #[error("source {0} is outside the board")]
    SourceOutOfBounds(Position),
    #[error("goal {0} is outside the board")]
    GoalOutOfBounds(Position),
    #[error("source and goal are both at {0}")]
    AnchorsCoincide(Position),
}
