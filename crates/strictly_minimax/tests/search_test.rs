//! Tests for minimax search over the public API.

mod common;

use common::reachable_boards;
use strictly_minimax::{
    Board, Move, Player, SearchConfig, Searcher, actions, apply, initial_state, minimax, play_out,
    player, terminal, utility,
};

/// Plays a game where `fixed` always follows minimax and the other side
/// tries every legal move, returning the worst utility for `fixed`.
fn worst_case_against_all_replies(board: Board, fixed: Player) -> i32 {
    if terminal(&board) {
        return utility(&board);
    }
    if player(&board) == fixed {
        let mv = minimax(&board).expect("non-terminal board has a move");
        return worst_case_against_all_replies(apply(&board, mv).unwrap(), fixed);
    }
    let outcomes = actions(&board)
        .into_iter()
        .map(|mv| worst_case_against_all_replies(apply(&board, mv).unwrap(), fixed));
    match fixed {
        Player::X => outcomes.min().unwrap_or(0),
        Player::O => outcomes.max().unwrap_or(0),
    }
}

#[test]
fn test_empty_board_returns_a_move() {
    assert!(minimax(&initial_state()).is_some());
}

#[test]
fn test_perfect_play_is_a_draw() {
    let (end, line) = play_out(&initial_state());
    assert!(terminal(&end));
    assert_eq!(utility(&end), 0);
    assert_eq!(line.len(), 9);
}

#[test]
fn test_terminal_board_returns_none() {
    let board: Board = "XXXOO....".parse().unwrap();
    assert_eq!(minimax(&board), None);
}

#[test]
fn test_completes_winning_row() {
    let board: Board = "XX.OO....".parse().unwrap();
    assert_eq!(player(&board), Player::X);
    assert_eq!(minimax(&board), Some(Move::new(0, 2)));
}

#[test]
fn test_x_never_loses_with_optimal_play() {
    assert!(worst_case_against_all_replies(initial_state(), Player::X) >= 0);
}

#[test]
fn test_o_never_loses_with_optimal_play() {
    assert!(worst_case_against_all_replies(initial_state(), Player::O) <= 0);
}

#[test]
fn test_chosen_move_is_value_optimal() {
    let mut searcher = Searcher::default();
    for board in reachable_boards() {
        if terminal(&board) {
            continue;
        }
        let result = searcher.search(&board);
        let mv = result.best_move().expect("non-terminal board has a move");
        assert!(actions(&board).contains(&mv));

        let after = apply(&board, mv).unwrap();
        assert_eq!(searcher.search(&after).value(), result.value(), "board\n{board}");
    }
}

#[test]
fn test_early_exit_preserves_values() {
    let mut pruned = Searcher::default();
    let mut full = Searcher::new(SearchConfig::exhaustive());
    for board in reachable_boards() {
        assert_eq!(
            pruned.search(&board).value(),
            full.search(&board).value(),
            "board\n{board}"
        );
    }
}

#[test]
fn test_exhaustive_search_counts_full_tree() {
    // Number of nodes in the complete game tree, root included.
    let mut full = Searcher::new(SearchConfig::exhaustive());
    full.search(&initial_state());
    assert_eq!(full.last_stats().nodes, 549_946);
    assert_eq!(full.last_stats().cutoffs, 0);
}
