//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Width and height of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the cell this player leaves behind when moving.
    pub fn mark(self) -> Cell {
        Cell::Marked(self)
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Marked(Player),
}

impl Cell {
    /// Notation character for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Player::X) => 'X',
            Cell::Marked(Player::O) => 'O',
        }
    }

    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A move: zero-based `(row, col)` coordinates on the board.
///
/// Coordinates are not checked on construction. A move naming a cell
/// outside the grid is rejected when it is applied.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    new,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index (0 is the top row).
    pub row: usize,
    /// Column index (0 is the left column).
    pub col: usize,
}

impl Move {
    /// Returns true if both coordinates lie on the 3x3 grid.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Converts to a row-major index (0-8), or `None` off the grid.
    pub fn to_index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * SIZE + self.col)
    }

    /// Creates a move from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then_some(Self::new(index / SIZE, index % SIZE))
    }

    /// Every on-grid move in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE * SIZE).map(|i| Move::new(i / SIZE, i % SIZE))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every transition produces a new board and
/// the input is never touched, so sibling branches of a search share
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// No reachability check is made; see [`Board::from_str`](std::str::FromStr)
    /// for a validating constructor.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given move, or `None` off the grid.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row).and_then(|row| row.get(mv.col)).copied()
    }

    /// Checks if the cell at `mv` is on the grid and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter().filter(|&c| c == Cell::Marked(player)).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.iter().all(|c| c != Cell::Empty)
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// The caller guarantees `mv` is on the grid.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn with_cell(mut self, mv: Move, cell: Cell) -> Self {
        self.cells[mv.row][mv.col] = cell;
        self
    }
}

/// Returns the starting board: every cell empty.
pub fn initial_state() -> Board {
    Board::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert!(board.iter().all(|c| c == Cell::Empty));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_move_index_conversion() {
        assert_eq!(Move::new(0, 0).to_index(), Some(0));
        assert_eq!(Move::new(1, 1).to_index(), Some(4));
        assert_eq!(Move::new(2, 2).to_index(), Some(8));
        assert_eq!(Move::new(3, 0).to_index(), None);
        assert_eq!(Move::from_index(5), Some(Move::new(1, 2)));
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_all_moves_row_major() {
        let all: Vec<_> = Move::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Move::new(0, 0));
        assert_eq!(all[8], Move::new(2, 2));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Board::new();
        let copy = original.with_cell(Move::new(1, 1), Player::X.mark());
        assert_eq!(original.get(Move::new(1, 1)), Some(Cell::Empty));
        assert_eq!(copy.get(Move::new(1, 1)), Some(Cell::Marked(Player::X)));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(Move::new(0, 3)), None);
        assert!(!board.is_empty(Move::new(3, 3)));
    }

    #[test]
    fn test_count_marks() {
        let board = Board::new()
            .with_cell(Move::new(0, 0), Player::X.mark())
            .with_cell(Move::new(2, 2), Player::O.mark())
            .with_cell(Move::new(1, 1), Player::X.mark());
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert!(!board.is_full());
    }

    #[test]
    fn test_players_alternate() {
        use strum::IntoEnumIterator;
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
            assert_eq!(player.mark().player(), Some(player));
        }
        assert_eq!(Cell::Empty.player(), None);
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Cell::Empty.to_string(), ".");
        assert_eq!(Player::O.mark().to_string(), "O");
        assert_eq!(Move::new(2, 1).to_string(), "(2, 1)");
    }
}
