//! Turn derivation.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the player who moves next on `board`.
///
/// X moves first, so it is O's turn exactly when X has more marks.
/// Only meaningful for boards reachable by alternating play.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}
