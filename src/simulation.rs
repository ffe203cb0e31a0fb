use crate::algorithms::common::{create_algorithm, Mode};
use crate::algorithms::reference::shortest_path_len;
use crate::config::Config;
use crate::error::{ConfigError, SearchError};
use crate::grid::{Board, GridMap};
use crate::playback::{PlaybackBuffer, Tick};
use crate::statistics::{ComparisonReport, SearchStats};
use rand::SeedableRng;
use std::thread;
use std::time::{Duration, Instant};

/// Builds the board described by `config`: anchors first, then random walls.
pub fn build_board(config: &Config) -> Result<Board, ConfigError> {
    if config.width * config.height < 2 {
        return Err(ConfigError::TooSmall(config.width, config.height));
    }
    let defaults = Board::new(config.width, config.height);
    let source = config.source.unwrap_or(defaults.source());
    let goal = config.goal.unwrap_or(defaults.goal());
    if !defaults.in_bounds(source.x, source.y) {
        return Err(ConfigError::SourceOutOfBounds(source));
    }
    if !defaults.in_bounds(goal.x, goal.y) {
        return Err(ConfigError::GoalOutOfBounds(goal));
    }
    if source == goal {
        return Err(ConfigError::AnchorsCoincide(source));
    }
    let mut board = Board::with_anchors(config.width, config.height, source, goal);

    let mut rng = match config.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };
    let placed = board.scatter_walls(config.num_walls, &mut rng);
    log::info!(
        "Generated board {}x{} - Source: {}, Goal: {}, Walls: {}",
        config.width,
        config.height,
        board.source(),
        board.goal(),
        placed
    );
    Ok(board)
}

/// Front-end controller: owns the board, the selected algorithm and the
/// playback of the last search.
pub struct Session {
    board: Board,
    mode: Mode,
    playback: PlaybackBuffer,
}

impl Session {
    pub fn new(board: Board, mode: Mode) -> Self {
        Session {
            board,
            mode,
            playback: PlaybackBuffer::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Takes effect at the next [`Session::find_path`].
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_loaded()
    }

    /// Applies a wall or anchor edit. Refused while a playback is still
    /// running so only one writer touches the board at a time.
    pub fn edit_board<F: FnOnce(&mut Board) -> bool>(&mut self, edit: F) -> bool {
        if self.is_playing() {
            log::debug!("board edit ignored during playback");
            return false;
        }
        self.board.clear_marks();
        edit(&mut self.board)
    }

    /// Searches between the board's anchors and queues the result for
    /// playback, replacing any playback still in progress.
    pub fn find_path(&mut self) -> Result<SearchStats, SearchError> {
        self.board.clear_marks();
        let mut algorithm = create_algorithm(self.mode);

        let started = Instant::now();
        let result = algorithm.search_anchors(&self.board)?;
        let stats = SearchStats::from_result(&result, started.elapsed());

        self.playback.load(&result);
        log::info!(
            "{}: {:?}, {} cells visited, {} queued for playback",
            algorithm.name(),
            result.outcome,
            stats.cells_visited,
            self.playback.remaining()
        );
        Ok(stats)
    }

    pub fn tick(&mut self) -> Tick {
        self.playback.advance(&mut self.board)
    }

    /// Ticks until the playback drains, calling `render` after every tick.
    /// Returns the number of ticks that revealed a cell.
    pub fn play<F: FnMut(&Board, Tick)>(&mut self, delay: Duration, mut render: F) -> usize {
        let mut revealed = 0;
        loop {
            let tick = self.tick();
            render(&self.board, tick);
            if !tick.is_progress() {
                break;
            }
            revealed += 1;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        revealed
    }
}

/// Runs every algorithm against the same board.
pub fn compare(board: &Board) -> Result<ComparisonReport, SearchError> {
    let mut rows = Vec::new();
    for mode in Mode::ALL {
        let mut session = Session::new(board.clone(), mode);
        rows.push(session.find_path()?);
    }
    let optimal_steps = shortest_path_len(board, board.source(), board.goal());
    Ok(ComparisonReport {
        rows,
        optimal_steps,
    })
}

/// Clear the terminal screen (only used when visualization is enabled)
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
