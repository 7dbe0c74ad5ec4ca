//! Minimax search for optimal play.
//!
//! X maximises and O minimises the utility of the terminal board. Each
//! call expands a fresh game tree from the given board; nothing is
//! cached between calls.

mod config;
mod minimax;
mod playout;
mod result;

pub use config::SearchConfig;
pub use minimax::{Searcher, max_value, min_value, minimax};
pub use playout::play_out;
pub use result::{SearchResult, SearchStats};
