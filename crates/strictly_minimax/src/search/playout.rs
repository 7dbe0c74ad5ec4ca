//! Optimal play-out to the end of the game.

use super::minimax::Searcher;
use crate::rules::transition::apply_legal;
use crate::types::{Board, Move};
use tracing::{debug, instrument};

impl Searcher {
    /// Plays optimal moves for both sides from `board` until the game ends.
    ///
    /// Returns the final board and the moves played, in order.
    #[instrument(skip(self, board))]
    pub fn play_out(&mut self, board: &Board) -> (Board, Vec<Move>) {
        let mut state = *board;
        let mut line = Vec::new();

        while let Some(mv) = self.best_move(&state) {
            debug!(%mv, ply = line.len(), "Playing optimal move");
            state = apply_legal(&state, mv);
            line.push(mv);
        }

        (state, line)
    }
}

/// Plays out `board` with the default configuration.
pub fn play_out(board: &Board) -> (Board, Vec<Move>) {
    Searcher::default().play_out(board)
}
