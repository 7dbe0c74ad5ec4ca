//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use strictly_minimax::{Board, actions, apply, initial_state, terminal};

/// Every board reachable from the empty board by legal play.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || terminal(&board) {
            continue;
        }
        for mv in actions(&board) {
            stack.push(apply(&board, mv).expect("legal move"));
        }
    }
    seen
}
