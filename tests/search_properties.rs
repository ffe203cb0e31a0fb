use grid_search::algorithms::reference::shortest_path_len;
use grid_search::{search, Board, GridMap, Mode, Outcome, Position, SearchError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};

fn open_board(width: usize, height: usize, source: Position, goal: Position) -> Board {
    Board::with_anchors(width, height, source, goal)
}

fn random_board(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(20, 15);
    board.scatter_walls(90, &mut rng);
    board
}

/// Cells reachable from the source, the source included.
fn reachable(board: &Board) -> HashSet<Position> {
    let mut seen = HashSet::from([board.source()]);
    let mut queue = VecDeque::from([board.source()]);
    while let Some(p) = queue.pop_front() {
        for n in p.neighbors() {
            if board.is_passable(n.x, n.y) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

fn assert_valid_path(path: &[Position], source: Position, goal: Position) {
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&goal));
    for pair in path.windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1, "{} -> {} is not a step", pair[0], pair[1]);
    }
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..40 {
        let source = Position::new(rng.gen_range(0..8), rng.gen_range(0..6));
        let mut goal = Position::new(rng.gen_range(0..8), rng.gen_range(0..6));
        if goal == source {
            goal = Position::new((source.x + 1) % 8, source.y);
        }
        let board = open_board(8, 6, source, goal);
        for mode in Mode::ALL {
            let result = search(&board, mode, source, goal).unwrap();
            assert_eq!(result.steps(), Some(source.manhattan(goal) as usize));
            assert_valid_path(&result.path, source, goal);
        }
    }
}

#[test]
fn five_by_five_corner_to_corner() {
    let board = open_board(5, 5, Position::new(0, 0), Position::new(4, 4));
    for mode in Mode::ALL {
        let result = search(&board, mode, board.source(), board.goal()).unwrap();
        assert_eq!(result.outcome, Outcome::Succeeded);
        assert_eq!(result.path.len(), 9);
        assert_valid_path(&result.path, board.source(), board.goal());
    }
}

#[test]
fn wall_with_single_gap_forces_route_through_gap() {
    let mut board = open_board(5, 5, Position::new(0, 0), Position::new(4, 4));
    for x in [0, 1, 3, 4] {
        board.set_wall(Position::new(x, 2));
    }
    for mode in Mode::ALL {
        let result = search(&board, mode, board.source(), board.goal()).unwrap();
        assert!(result.path.contains(&Position::new(2, 2)), "{} missed the gap", mode);
        assert_valid_path(&result.path, board.source(), board.goal());
    }
}

#[test]
fn source_equal_to_goal_expands_once() {
    let board = open_board(5, 5, Position::new(0, 0), Position::new(4, 4));
    let here = Position::new(2, 3);
    for mode in Mode::ALL {
        let result = search(&board, mode, here, here).unwrap();
        assert_eq!(result.path, vec![here]);
        assert_eq!(result.visitation_trace, vec![here]);
        assert_eq!(result.steps(), Some(0));
    }
}

#[test]
fn sealed_goal_exhausts_whole_component() {
    let mut board = open_board(7, 7, Position::new(0, 0), Position::new(5, 5));
    for p in Position::new(5, 5).neighbors() {
        board.set_wall(p);
    }
    let component = reachable(&board);
    for mode in Mode::ALL {
        let result = search(&board, mode, board.source(), board.goal()).unwrap();
        assert_eq!(result.outcome, Outcome::Exhausted);
        assert!(result.path.is_empty());
        let traced: HashSet<Position> = result.visitation_trace.iter().copied().collect();
        assert_eq!(traced, component);
    }
}

#[test]
fn traces_are_unique_and_passable() {
    for seed in 0..20 {
        let board = random_board(seed);
        for mode in Mode::ALL {
            let result = search(&board, mode, board.source(), board.goal()).unwrap();
            let unique: HashSet<Position> = result.visitation_trace.iter().copied().collect();
            assert_eq!(unique.len(), result.visitation_trace.len(), "duplicate expansion");
            for p in &result.visitation_trace {
                assert!(board.in_bounds(p.x, p.y));
                assert!(*p == board.source() || board.is_passable(p.x, p.y));
            }
        }
    }
}

#[test]
fn modes_agree_on_length_and_match_reference() {
    let mut a_star_total = 0;
    let mut dijkstra_total = 0;
    for seed in 0..30 {
        let board = random_board(seed);
        let a_star = search(&board, Mode::AStar, board.source(), board.goal()).unwrap();
        let dijkstra = search(&board, Mode::Dijkstra, board.source(), board.goal()).unwrap();
        let optimal = shortest_path_len(&board, board.source(), board.goal());

        assert_eq!(a_star.steps(), dijkstra.steps(), "seed {}", seed);
        assert_eq!(a_star.steps(), optimal, "seed {}", seed);
        if optimal.is_some() {
            assert_valid_path(&a_star.path, board.source(), board.goal());
            for p in &a_star.path[1..] {
                assert!(board.is_passable(p.x, p.y));
            }
        }
        a_star_total += a_star.visitation_trace.len();
        dijkstra_total += dijkstra.visitation_trace.len();
    }
    assert!(a_star_total <= dijkstra_total);
}

#[test]
fn searches_are_deterministic() {
    let board = random_board(99);
    for mode in Mode::ALL {
        let first = search(&board, mode, board.source(), board.goal()).unwrap();
        let second = search(&board, mode, board.source(), board.goal()).unwrap();
        assert_eq!(first.visitation_trace, second.visitation_trace);
        assert_eq!(first.path, second.path);
    }
}

#[test]
fn obstacle_anchor_is_rejected() {
    let mut board = open_board(4, 4, Position::new(0, 0), Position::new(3, 3));
    board.set_wall(Position::new(1, 1));
    assert_eq!(
        search(&board, Mode::AStar, Position::new(1, 1), board.goal()),
        Err(SearchError::SourceBlocked(Position::new(1, 1)))
    );
}
