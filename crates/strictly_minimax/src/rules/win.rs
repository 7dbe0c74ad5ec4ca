//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Move, Player};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Move {
    Move { row, col }
}

/// Every winning line, in scan order: rows, then columns, then the
/// main diagonal and the anti-diagonal.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a)?;
        match cell {
            Cell::Marked(player) if board.get(b) == Some(cell) && board.get(c) == Some(cell) => {
                Some(player)
            }
            _ => None,
        }
    })
}
