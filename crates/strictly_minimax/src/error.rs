//! Error types for move application, board parsing, and configuration.

use crate::types::Move;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised when a move cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    OccupiedCell(Move),

    /// A coordinate lies outside the 3x3 grid.
    #[display("Coordinates ({row}, {col}) are outside the 3x3 grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Error raised when board notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is not a recognised cell symbol.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidCell(char),

    /// Mark counts cannot arise from alternating play with X first.
    #[display("Unreachable position: {x} X marks and {o} O marks")]
    Unreachable {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for BoardParseError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
