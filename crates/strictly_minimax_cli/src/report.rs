//! Printable analysis results.

use serde::Serialize;
use strictly_minimax::{Board, Move, Outcome, Player, SearchResult, SearchStats};

/// Result of the `solve` command.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    /// Position that was searched.
    pub board: Board,
    /// Side to move, `None` once the game is over.
    pub to_move: Option<Player>,
    /// Game value from X's point of view.
    pub value: i32,
    /// Optimal move, `None` once the game is over.
    pub best_move: Option<Move>,
    /// Search counters.
    pub stats: SearchStats,
}

impl SolveReport {
    /// Builds a report from a finished search.
    pub fn new(
        board: Board,
        to_move: Option<Player>,
        result: SearchResult,
        stats: SearchStats,
    ) -> Self {
        Self {
            board,
            to_move,
            value: result.value(),
            best_move: result.best_move(),
            stats,
        }
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match (self.to_move, self.best_move) {
            (Some(player), Some(mv)) => writeln!(f, "{} to move, best move {}", player, mv)?,
            _ => writeln!(f, "Game over")?,
        }
        writeln!(f, "Value: {}", self.value)?;
        write!(
            f,
            "Nodes: {}, cut-offs: {}",
            self.stats.nodes, self.stats.cutoffs
        )
    }
}

/// Result of the `playout` command.
#[derive(Debug, Serialize)]
pub struct PlayoutReport {
    /// Starting position.
    pub start: Board,
    /// Moves played, in order.
    pub line: Vec<Move>,
    /// Final position.
    pub end: Board,
    /// How the game ended.
    pub outcome: Option<Outcome>,
}

impl std::fmt::Display for PlayoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves: Vec<String> = self.line.iter().map(ToString::to_string).collect();
        writeln!(f, "Line: {}", moves.join(" "))?;
        writeln!(f, "{}", self.end)?;
        match self.outcome {
            Some(outcome) => write!(f, "Result: {}", outcome),
            None => write!(f, "Result: unfinished"),
        }
    }
}
