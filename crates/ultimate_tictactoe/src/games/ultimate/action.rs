//! First-class move types for ultimate tic-tac-toe.
//!
//! A move names a sub-board and a cell inside it. Which player makes it is
//! supplied separately when the move is applied, so the search can simulate
//! either side with the same values.

use super::types::{ActiveTarget, Coord};
use serde::{Deserialize, Serialize};

/// A move: target sub-board plus the cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// The sub-board being played in.
    pub board: Coord,
    /// The cell within that sub-board.
    pub cell: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Coord, cell: Coord) -> Self {
        Self { board, cell }
    }

    /// Builds a move from `(board_row, board_col, cell_row, cell_col)`.
    ///
    /// Returns `None` if any component is outside 0..3.
    pub fn from_tuple((br, bc, cr, cc): (u8, u8, u8, u8)) -> Option<Self> {
        Some(Self {
            board: Coord::new(br, bc)?,
            cell: Coord::new(cr, cc)?,
        })
    }

    /// Returns `(board_row, board_col, cell_row, cell_col)`.
    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (
            self.board.row(),
            self.board.col(),
            self.cell.row(),
            self.cell.col(),
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (br, bc, cr, cc) = self.as_tuple();
        write!(f, "({},{},{},{})", br, bc, cr, cc)
    }
}

/// Error returned when a move violates the rules.
///
/// Every variant is a caller contract violation: drivers are expected to
/// submit only moves drawn from the legal move list.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// The target sub-board is already won or drawn.
    #[display("Sub-board {} is already decided", _0.board)]
    BoardDecided(Move),

    /// The move lands outside the active target.
    #[display("Move {} must be played in {}", mv, target)]
    WrongBoard {
        /// The rejected move.
        mv: Move,
        /// Where the move had to land.
        target: ActiveTarget,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
