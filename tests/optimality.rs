use std::collections::{HashMap, VecDeque};

use eight_puzzle::{
    heuristic::Manhattan, solve, solve_board, Board, InvalidBoardError, SolverConfig,
    SolverError,
};
use rand::{rngs::StdRng, SeedableRng};

/// Exact distance to the standard goal for every board in its parity class.
fn bfs_distances() -> HashMap<Board, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(Board::goal(), 0);
    queue.push_back(Board::goal());

    while let Some(board) = queue.pop_front() {
        let d = dist[&board];
        for (_, next) in board.successors() {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

#[test]
fn scenario_boards() {
    let two = solve([[1, 2, 0], [3, 4, 5], [6, 7, 8]]).unwrap();
    assert_eq!(two.len(), 2);
    assert!(two.final_board().unwrap().is_goal());

    assert!(solve([[0, 1, 2], [3, 4, 5], [6, 7, 8]]).unwrap().is_empty());

    assert!(matches!(
        solve([[1, 0, 2], [3, 4, 5], [6, 7, 7]]),
        Err(SolverError::InvalidBoard(InvalidBoardError::Duplicate { value: 7 }))
    ));

    assert!(matches!(
        solve([[0, 1, 2], [3, 4, 5], [6, 8, 7]]),
        Err(SolverError::NoSolutionFound { .. })
    ));
}

#[test]
fn lengths_match_breadth_first_search() {
    let dist = bfs_distances();
    assert_eq!(dist.len(), 181_440);

    let hard = [[8, 0, 6], [5, 4, 7], [2, 3, 1]];
    let solution = solve(hard).unwrap();
    assert_eq!(solution.len(), dist[&Board::new(hard).unwrap()]);
    assert!(solution.final_board().unwrap().is_goal());

    let mut rng = StdRng::seed_from_u64(89);
    let config = SolverConfig::default();
    for _ in 0..25 {
        let start = Board::shuffled(&Board::goal(), &mut rng);
        let solution = solve_board(&start, &config).unwrap();
        assert_eq!(solution.len(), dist[&start], "start:\n{start}");
    }
}

#[test]
fn manhattan_never_overestimates() {
    let h = Manhattan::default();
    for (board, d) in bfs_distances() {
        assert!(h.estimate(&board) as usize <= d, "board:\n{board}");
    }
}

#[test]
fn paths_replay_to_the_goal_with_rising_depth() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let start = Board::shuffled(&Board::goal(), &mut rng);
        let solution = solve(start.rows()).unwrap();

        let mut board = start;
        for (i, step) in solution.steps().iter().enumerate() {
            assert_eq!(step.depth as usize, i + 1);
            board = board.apply_move(step.movement).unwrap();
            assert_eq!(board, step.board);
        }
        assert!(board.is_goal());
        assert_eq!(solve(start.rows()).unwrap(), solution);
    }
}

#[test]
fn consecutive_steps_undo_with_the_opposite_move() {
    let solution = solve([[8, 0, 6], [5, 4, 7], [2, 3, 1]]).unwrap();
    let steps = solution.steps();
    for pair in steps.windows(2) {
        let back = pair[1].board.apply_move(pair[1].movement.opposite());
        assert_eq!(back, Some(pair[0].board));
    }
    assert!(!solution.is_empty());
}
