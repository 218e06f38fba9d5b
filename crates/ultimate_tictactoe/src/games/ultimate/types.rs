//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
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
}

/// A single cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Outcome of one sub-board, as recorded on the meta-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubOutcome {
    /// Still playable.
    #[default]
    Undecided,
    /// Three in a row for the player.
    Won(Player),
    /// Full with no line.
    Drawn,
}

impl SubOutcome {
    /// True once the sub-board is won or drawn.
    pub fn is_decided(self) -> bool {
        !matches!(self, SubOutcome::Undecided)
    }

    /// The player owning this sub-board on the meta-board.
    ///
    /// Drawn sub-boards belong to nobody, so they never complete a meta line.
    pub fn winner(self) -> Option<Player> {
        match self {
            SubOutcome::Won(player) => Some(player),
            SubOutcome::Undecided | SubOutcome::Drawn => None,
        }
    }
}

/// A (row, col) coordinate inside a 3x3 grid.
///
/// Used both for sub-boards on the meta-board and for cells within a
/// sub-board; index is `row * 3 + col` in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// The center coordinate.
    pub const CENTER: Coord = Coord { row: 1, col: 1 };

    /// Creates a coordinate, or `None` if either component is outside 0..3.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Row (0-2).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> u8 {
        self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Where the next move must land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveTarget {
    /// Any undecided sub-board.
    #[default]
    Any,
    /// Exactly this sub-board.
    Board(Coord),
}

impl std::fmt::Display for ActiveTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveTarget::Any => write!(f, "any board"),
            ActiveTarget::Board(coord) => write!(f, "board {}", coord),
        }
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player completed a line of sub-boards.
    WonBy(Player),
    /// Every sub-board decided with no meta line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::WonBy(player) => Some(*player),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::WonBy(player) => write!(f, "Player {} wins", player),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_index_round_trip() {
        for (index, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), index);
            assert_eq!(Coord::from_index(index), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_coord_rejects_out_of_range() {
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
        assert_eq!(Coord::new(1, 1), Some(Coord::CENTER));
    }

    #[test]
    fn test_drawn_sub_board_has_no_owner() {
        assert_eq!(SubOutcome::Drawn.winner(), None);
        assert!(SubOutcome::Drawn.is_decided());
        assert!(!SubOutcome::Undecided.is_decided());
        assert_eq!(SubOutcome::Won(Player::O).winner(), Some(Player::O));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
