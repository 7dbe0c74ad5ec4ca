//! Terminal-state detection.

use super::win::winner;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{} wins", _0)]
    Win(Player),
    /// The board filled with no complete line.
    #[display("Draw")]
    Draw,
}

/// Returns true if the game is over: a line is complete or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Returns the outcome of a terminal board, `None` while play continues.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Win(player)),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}
