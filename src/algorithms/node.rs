use crate::algorithms::common::Mode;
use crate::grid::Position;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Per-cell search record. Two nodes are the same node when they share a
/// position, whatever their costs.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub pos: Position,
    pub g: u32,
    pub h: u32,
}

impl SearchNode {
    pub fn new(pos: Position, g: u32, h: u32) -> Self {
        SearchNode { pos, g, h }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

/// Builds frontier keys for one search run.
#[derive(Debug, Clone, Copy)]
pub struct Priority {
    mode: Mode,
    tie_break: f64,
}

impl Priority {
    /// `tie_break` is `1 + 1/(width * height)`, nudging A* towards the goal
    /// when totals are equal.
    pub fn new(mode: Mode, width: usize, height: usize) -> Self {
        let cells = (width * height).max(1) as f64;
        Priority {
            mode,
            tie_break: 1.0 + 1.0 / cells,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn key(&self, node: &SearchNode) -> Key {
        match self.mode {
            Mode::AStar => Key(node.g as f64 + node.h as f64 * self.tie_break),
            Mode::Dijkstra => Key(node.g as f64),
        }
    }
}

/// Frontier sort key. Totally ordered through `f64::total_cmp`.
#[derive(Debug, Clone, Copy)]
pub struct Key(pub f64);

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Heap entry. `stamp` ties the entry to the latest push for its position so
/// superseded entries can be skipped when popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub key: Key,
    pub node: SearchNode,
    pub stamp: u64,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest key first.
        other.key.cmp(&self.key)
    }
}
