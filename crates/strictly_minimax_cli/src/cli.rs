//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::Board;

/// Strictly Minimax - optimal tic-tac-toe analysis
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Solve tic-tac-toe positions with minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML search configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Expand every sibling instead of stopping at the first winning move
    #[arg(long, global = true)]
    pub exhaustive: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move and game value for a position
    Solve {
        /// Board as nine row-major cells of X, O and '.' (e.g. "XX./OO./...")
        #[arg(short, long)]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play optimal moves for both sides until the game ends
    Playout {
        /// Starting board (defaults to the empty board)
        #[arg(short, long, default_value = ".........")]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
