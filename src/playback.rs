//! Replays a finished search one cell at a time.
//!
//! The search computes its whole trace up front; [`PlaybackBuffer`] holds it
//! and hands out one entry per [`PlaybackBuffer::advance`] so a ticking
//! front end can reveal it progressively.

use crate::algorithms::common::SearchResult;
use crate::grid::Position;
use std::collections::VecDeque;

/// Receiver of replayed cells, normally the board being displayed.
pub trait PlaybackSink {
    fn mark_visited(&mut self, pos: Position);
    fn mark_path(&mut self, pos: Position);
    fn mark_anchors(&mut self, source: Position, goal: Position);
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Visited(Position),
    Path(Position),
    /// Both queues just ran out; anchors were re-marked.
    Drained,
    /// Nothing loaded.
    Idle,
}

impl Tick {
    /// True while the replay is still emitting cells.
    pub fn is_progress(&self) -> bool {
        matches!(self, Tick::Visited(_) | Tick::Path(_))
    }
}

#[derive(Debug, Default, Clone)]
pub struct PlaybackBuffer {
    visited: VecDeque<Position>,
    path: VecDeque<Position>,
    anchors: Option<(Position, Position)>,
    loaded: bool,
}

impl PlaybackBuffer {
    pub fn new() -> Self {
        PlaybackBuffer::default()
    }

    /// Replaces whatever is queued with the trace and path of `result`.
    pub fn load(&mut self, result: &SearchResult) {
        self.visited = result.visitation_trace.iter().copied().collect();
        self.path = result.path.iter().copied().collect();
        self.anchors = Some((result.source, result.goal));
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Entries left before the buffer drains.
    pub fn remaining(&self) -> usize {
        self.visited.len() + self.path.len()
    }

    pub fn advance<S: PlaybackSink + ?Sized>(&mut self, sink: &mut S) -> Tick {
        if !self.loaded {
            return Tick::Idle;
        }
        if let Some(pos) = self.visited.pop_front() {
            sink.mark_visited(pos);
            return Tick::Visited(pos);
        }
        if let Some(pos) = self.path.pop_front() {
            sink.mark_path(pos);
            return Tick::Path(pos);
        }
        if let Some((source, goal)) = self.anchors.take() {
            sink.mark_anchors(source, goal);
        }
        self.loaded = false;
        Tick::Drained
    }
}
