//! Legal move enumeration.

use crate::types::{Board, Move};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the set of moves whose target cell is empty.
///
/// The set is empty on a full board. Callers must not rely on its
/// iteration order for anything beyond tie-breaking.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Move> {
    Move::all().filter(|&mv| board.is_empty(mv)).collect()
}
