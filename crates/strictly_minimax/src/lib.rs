//! Strictly Minimax - optimal tic-tac-toe
//!
//! Pure game-state transitions for 3x3 tic-tac-toe plus a minimax search
//! that returns the game-theoretically optimal move for the side to move.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`Move`] as plain `Copy` values
//! - **Rules**: [`player`], [`actions`], [`apply`], [`winner`], [`terminal`]
//! - **Evaluation**: [`utility`] of a finished board from X's point of view
//! - **Search**: [`minimax`] and the configurable [`Searcher`]
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{apply, initial_state, minimax, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(mv) = minimax(&board) {
//!     board = apply(&board, mv)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), strictly_minimax::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod eval;
mod notation;
mod rules;
mod search;
mod types;

// Crate-level exports - Core types
pub use types::{Board, Cell, Move, Player, SIZE, initial_state};

// Crate-level exports - Errors
pub use error::{BoardParseError, ConfigError, MoveError};

// Crate-level exports - Rules
pub use rules::{LINES, Outcome, actions, apply, outcome, player, terminal, winner};

// Crate-level exports - Evaluation
pub use eval::{DRAW, O_WINS, X_WINS, utility};

// Crate-level exports - Search
pub use search::{
    SearchConfig, SearchResult, SearchStats, Searcher, max_value, min_value, minimax, play_out,
};
