//! Text notation for boards.
//!
//! A board is written as nine cell symbols in row-major order: `X`, `O`,
//! and `.` (or `_` or `-`) for an empty cell. Whitespace and the row separators
//! `/` and `|` are ignored, so `"XO./.X./..O"` and `"XO. .X. ..O"` both
//! parse.

use crate::error::BoardParseError;
use crate::types::{Board, Cell, Player, SIZE};
use std::str::FromStr;
use tracing::{debug, instrument};

fn parse_cell(c: char) -> Result<Cell, BoardParseError> {
    match c {
        'X' | 'x' => Ok(Cell::Marked(Player::X)),
        'O' | 'o' => Ok(Cell::Marked(Player::O)),
        '.' | '_' | '-' => Ok(Cell::Empty),
        other => Err(BoardParseError::InvalidCell(other)),
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses board notation, rejecting mark counts that alternating play
    /// with X first cannot produce.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if symbols.len() != SIZE * SIZE {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in symbols.iter().enumerate() {
            cells[i / SIZE][i % SIZE] = parse_cell(c)?;
        }
        let board = Board::from_rows(cells);

        let x = board.count(Player::X);
        let o = board.count(Player::O);
        if x != o && x != o + 1 {
            debug!(x, o, "Rejecting unreachable board");
            return Err(BoardParseError::Unreachable { x, o });
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells().iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            if i + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
