use crate::grid::{GridMap, Position};
use pathfinding::prelude::astar;

/// Optimal number of moves from `source` to `goal`, computed independently
/// of the crate's own engine with the `pathfinding` crate.
///
/// Returns `None` when the goal cannot be reached.
pub fn shortest_path_len<G: GridMap + ?Sized>(
    grid: &G,
    source: Position,
    goal: Position,
) -> Option<usize> {
    let result = astar(
        &source,
        |p| {
            p.neighbors()
                .into_iter()
                .filter(|n| grid.is_passable(n.x, n.y))
                .map(|n| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |p| p.manhattan(goal),
        |p| *p == goal,
    );

    // `astar` returns `(path, cost)`; the cost is the move count.
    result.map(|(_, cost)| cost as usize)
}
