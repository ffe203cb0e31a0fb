use crate::error::PositionParseError;
use crate::playback::PlaybackSink;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Canvas units per cell in the original drawing surface.
pub const CELL_STRIDE: i32 = 10;

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Axis-aligned neighbours in expansion order: +x, -x, +y, -y.
    pub fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x + 1, self.y),
            Position::new(self.x - 1, self.y),
            Position::new(self.x, self.y + 1),
            Position::new(self.x, self.y - 1),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PositionParseError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Position { x, y })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Obstacle,
    Goal,
    Visited,
    Path,
    Source,
}

/// Read-only view of a grid, as queried by the search engine.
pub trait GridMap {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// True for in-bounds `Empty` and `Goal` cells.
    fn is_passable(&self, x: i32, y: i32) -> bool;

    fn is_obstacle(&self, x: i32, y: i32) -> bool;

    fn source(&self) -> Position;
    fn goal(&self) -> Position;
}

/// The mutable obstacle map. Owns cell state and the two anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
    source: Position,
    goal: Position,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    /// Creates an empty board with the source near the top-left corner and
    /// the goal near the bottom-right corner.
    ///
    /// Boards too small for those spots fall back to the opposite corners.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width * height >= 2, "board needs room for a source and a goal");
        let (w, h) = (width as i32, height as i32);
        let mut source = Position::new(4, 3);
        let mut goal = Position::new(w - 3, h - 4);
        if source.x >= w || source.y >= h || goal.x < 0 || goal.y < 0 || source == goal {
            source = Position::new(0, 0);
            goal = Position::new(w - 1, h - 1);
        }
        Board::with_anchors(width, height, source, goal)
    }

    /// Creates an empty board with explicit anchors. Both must be in bounds
    /// and distinct.
    pub fn with_anchors(width: usize, height: usize, source: Position, goal: Position) -> Self {
        let mut board = Board {
            width,
            height,
            cells: vec![vec![Cell::Empty; height]; width],
            source,
            goal,
        };
        assert!(board.in_bounds(source.x, source.y), "source {} out of bounds", source);
        assert!(board.in_bounds(goal.x, goal.y), "goal {} out of bounds", goal);
        assert_ne!(source, goal, "source and goal must differ");
        board.set(source, Cell::Source);
        board.set(goal, Cell::Goal);
        board
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos.x, pos.y) {
            Some(self.cells[pos.x as usize][pos.y as usize])
        } else {
            None
        }
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.x as usize][pos.y as usize] = cell;
    }

    pub fn set_wall(&mut self, pos: Position) -> bool {
        if !self.in_bounds(pos.x, pos.y) || pos == self.source || pos == self.goal {
            return false;
        }
        self.set(pos, Cell::Obstacle);
        true
    }

    pub fn remove_wall(&mut self, pos: Position) -> bool {
        if self.cell(pos) != Some(Cell::Obstacle) {
            return false;
        }
        self.set(pos, Cell::Empty);
        true
    }

    pub fn place_source(&mut self, pos: Position) -> bool {
        if !self.in_bounds(pos.x, pos.y) || pos == self.goal {
            return false;
        }
        let old = self.source;
        self.set(old, Cell::Empty);
        self.source = pos;
        self.set(pos, Cell::Source);
        true
    }

    pub fn place_goal(&mut self, pos: Position) -> bool {
        if !self.in_bounds(pos.x, pos.y) || pos == self.source {
            return false;
        }
        let old = self.goal;
        self.set(old, Cell::Empty);
        self.goal = pos;
        self.set(pos, Cell::Goal);
        true
    }

    pub fn set_wall_at_canvas(&mut self, px: i32, py: i32) -> bool {
        self.set_wall(canvas_to_cell(px, py))
    }

    pub fn remove_wall_at_canvas(&mut self, px: i32, py: i32) -> bool {
        self.remove_wall(canvas_to_cell(px, py))
    }

    pub fn place_source_at_canvas(&mut self, px: i32, py: i32) -> bool {
        self.place_source(canvas_to_cell(px, py))
    }

    pub fn place_goal_at_canvas(&mut self, px: i32, py: i32) -> bool {
        self.place_goal(canvas_to_cell(px, py))
    }

    /// Turns every visited or path cell back into an empty one.
    pub fn clear_marks(&mut self) {
        for column in &mut self.cells {
            for cell in column.iter_mut() {
                if matches!(cell, Cell::Visited | Cell::Path) {
                    *cell = Cell::Empty;
                }
            }
        }
    }

    /// Places up to `count` walls at random empty cells, never on an anchor.
    pub fn scatter_walls<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < count && attempts < count * 3 {
            let pos = Position::new(
                rng.gen_range(0..self.width as i32),
                rng.gen_range(0..self.height as i32),
            );
            if self.cell(pos) == Some(Cell::Empty) && self.set_wall(pos) {
                walls_placed += 1;
            }
            attempts += 1;
        }
        walls_placed
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == kind)
            .count()
    }
}

fn canvas_to_cell(px: i32, py: i32) -> Position {
    Position::new(px.div_euclid(CELL_STRIDE), py.div_euclid(CELL_STRIDE))
}

impl GridMap for Board {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_passable(&self, x: i32, y: i32) -> bool {
        matches!(
            self.cell(Position::new(x, y)),
            Some(Cell::Empty) | Some(Cell::Goal)
        )
    }

    fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.cell(Position::new(x, y)) == Some(Cell::Obstacle)
    }

    fn source(&self) -> Position {
        self.source
    }

    fn goal(&self) -> Position {
        self.goal
    }
}

impl PlaybackSink for Board {
    fn mark_visited(&mut self, pos: Position) {
        if self.cell(pos).is_some() {
            self.set(pos, Cell::Visited);
        }
    }

    fn mark_path(&mut self, pos: Position) {
        if self.cell(pos).is_some() {
            self.set(pos, Cell::Path);
        }
    }

    // The board's own anchors win if they moved since the search ran.
    fn mark_anchors(&mut self, _source: Position, _goal: Position) {
        let (source, goal) = (self.source, self.goal);
        self.set(source, Cell::Source);
        self.set(goal, Cell::Goal);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Legend: S=Source, G=Goal, #=Obstacle, o=Visited, *=Path, .=Empty")?;
        for y in 0..self.height {
            for x in 0..self.width {
                let c = match self.cells[x][y] {
                    Cell::Empty => '.',
                    Cell::Obstacle => '#',
                    Cell::Goal => 'G',
                    Cell::Visited => 'o',
                    Cell::Path => '*',
                    Cell::Source => 'S',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
