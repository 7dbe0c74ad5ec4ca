//! Game rules for tic-tac-toe.
//!
//! Pure functions of a board: whose turn it is, which moves are legal,
//! the board a move produces, and whether the game is over.

pub mod actions;
pub mod terminal;
pub mod transition;
pub mod turn;
pub mod win;

pub use actions::actions;
pub use terminal::{Outcome, outcome, terminal};
pub use transition::apply;
pub use turn::player;
pub use win::{LINES, winner};
