//! Recursive minimax with an early-exit cut-off.

use super::config::SearchConfig;
use super::result::{SearchResult, SearchStats};
use crate::eval::{O_WINS, X_WINS, utility};
use crate::rules::transition::apply_legal;
use crate::rules::{actions, player, terminal};
use crate::types::{Board, Move, Player};
use tracing::{debug, instrument};

/// Minimax searcher.
///
/// Holds configuration and the counters of the most recent root search.
/// The game tree itself is rebuilt on every call.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent call to [`search`](Self::search) or
    /// [`best_move`](Self::best_move).
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` for the side to move and returns its game value and
    /// optimal move. A terminal board yields its utility and no move.
    #[instrument(skip(self, board), fields(to_move = %player(board)))]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.stats = SearchStats::default();
        let result = match player(board) {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        };
        debug!(
            value = result.value(),
            best_move = ?result.best_move(),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );
        result
    }

    /// Returns the optimal move for the side to move, `None` on a terminal
    /// board.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        if terminal(board) {
            self.stats = SearchStats::default();
            return None;
        }
        self.search(board).best_move()
    }

    /// Best result for X on `board`.
    ///
    /// Among moves of equal value the first one found in iteration order is
    /// kept.
    pub fn max_value(&mut self, board: &Board) -> SearchResult {
        self.visit();
        if terminal(board) {
            return SearchResult::leaf(utility(board));
        }

        let mut best = SearchResult::new(i32::MIN, None);
        for mv in actions(board) {
            let reply = self.min_value(&apply_legal(board, mv));
            if reply.value() > best.value() {
                best = SearchResult::new(reply.value(), Some(mv));
                if *self.config.early_exit() && best.value() == X_WINS {
                    self.cutoff();
                    return best;
                }
            }
        }
        best
    }

    /// Best result for O on `board`.
    ///
    /// Mirror image of [`max_value`](Self::max_value).
    pub fn min_value(&mut self, board: &Board) -> SearchResult {
        self.visit();
        if terminal(board) {
            return SearchResult::leaf(utility(board));
        }

        let mut best = SearchResult::new(i32::MAX, None);
        for mv in actions(board) {
            let reply = self.max_value(&apply_legal(board, mv));
            if reply.value() < best.value() {
                best = SearchResult::new(reply.value(), Some(mv));
                if *self.config.early_exit() && best.value() == O_WINS {
                    self.cutoff();
                    return best;
                }
            }
        }
        best
    }

    fn visit(&mut self) {
        if *self.config.collect_stats() {
            self.stats.nodes += 1;
        }
    }

    fn cutoff(&mut self) {
        if *self.config.collect_stats() {
            self.stats.cutoffs += 1;
        }
    }
}

/// Returns the optimal move for the side to move, `None` if the game is over.
pub fn minimax(board: &Board) -> Option<Move> {
    Searcher::default().best_move(board)
}

/// Maximising search for X with the default configuration.
pub fn max_value(board: &Board) -> SearchResult {
    Searcher::default().max_value(board)
}

/// Minimising search for O with the default configuration.
pub fn min_value(board: &Board) -> SearchResult {
    Searcher::default().min_value(board)
}
