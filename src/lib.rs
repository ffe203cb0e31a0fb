pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod playback;
pub mod simulation;
pub mod statistics;

pub use algorithms::best_first::{search, BestFirstSearch};
pub use algorithms::common::{Mode, Outcome, PathfindingAlgorithm, SearchResult, SearchState};
pub use error::SearchError;
pub use grid::{Board, Cell, GridMap, Position};
pub use playback::{PlaybackBuffer, PlaybackSink, Tick};
