//! Terminal-board evaluation.

use crate::rules::winner;
use crate::types::{Board, Player};
use tracing::instrument;

/// Utility of a win for X.
pub const X_WINS: i32 = 1;
/// Utility of a win for O.
pub const O_WINS: i32 = -1;
/// Utility of a draw.
pub const DRAW: i32 = 0;

/// Returns the value of a terminal board from X's point of view.
///
/// `1` if X has won, `-1` if O has won, `0` otherwise. Only meaningful on
/// terminal boards; an unfinished board without a line also scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
