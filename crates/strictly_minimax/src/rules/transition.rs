//! Move application.

use super::turn::player;
use crate::error::MoveError;
use crate::types::{Board, Cell, Move};
use tracing::{instrument, trace};

/// Returns the board that results from the current mover playing `mv`.
///
/// The mover is derived from `board` before the mark is placed. The input
/// board is left untouched.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if either coordinate is off the grid,
/// or [`MoveError::OccupiedCell`] if the target cell is already marked.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &Board, mv: Move) -> Result<Board, MoveError> {
    match board.get(mv) {
        None => Err(MoveError::OutOfBounds {
            row: mv.row,
            col: mv.col,
        }),
        Some(Cell::Marked(_)) => Err(MoveError::OccupiedCell(mv)),
        Some(Cell::Empty) => Ok(apply_legal(board, mv)),
    }
}

/// Places the current mover's mark at `mv` without validation.
///
/// `mv` must be a legal move drawn from `actions` on the same board.
pub(crate) fn apply_legal(board: &Board, mv: Move) -> Board {
    let mover = player(board);
    trace!(?mover, %mv, "Placing mark");
    board.with_cell(mv, mover.mark())
}
