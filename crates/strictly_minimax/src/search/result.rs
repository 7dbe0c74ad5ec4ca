//! Search outputs.

use crate::types::Move;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Game value of a board together with the move that achieves it.
///
/// Leaves carry a value and no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SearchResult {
    value: i32,
    best_move: Option<Move>,
}

impl SearchResult {
    /// Result for a terminal board.
    pub fn leaf(value: i32) -> Self {
        Self::new(value, None)
    }

    /// Game value from X's point of view.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Optimal move, `None` at a leaf.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

/// Counters for one root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, root and leaves included.
    pub nodes: u64,
    /// Times the early-exit rule skipped remaining siblings.
    pub cutoffs: u64,
}
