use crate::algorithms::common::Mode;
use crate::grid::{Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    AStar,
    Dijkstra,
    /// Run every algorithm on the same board and compare.
    All,
}

impl AlgorithmChoice {
    pub fn mode(self) -> Option<Mode> {
        match self {
            AlgorithmChoice::AStar => Some(Mode::AStar),
            AlgorithmChoice::Dijkstra => Some(Mode::Dijkstra),
            AlgorithmChoice::All => None,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::AStar)]
    pub algorithm: AlgorithmChoice,

    #[arg(long, default_value_t = 1500)]
    pub num_walls: usize,

    /// Seed for wall placement; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between playback ticks.
    #[arg(long, default_value_t = 5)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Source cell as `x,y`.
    #[arg(long)]
    pub source: Option<Position>,

    /// Goal cell as `x,y`.
    #[arg(long)]
    pub goal: Option<Position>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            algorithm: AlgorithmChoice::AStar,
            num_walls: 1500,
            seed: None,
            delay_ms: 5,
            no_visualization: false,
            source: None,
            goal: None,
        }
    }
}
