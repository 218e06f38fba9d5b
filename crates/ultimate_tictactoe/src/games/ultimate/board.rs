//! Sub-boards, the meta-board, and the combined grid the rules operate on.

use super::action::Move;
use super::rules::{check_winner, is_full};
use super::types::{ActiveTarget, Cell, Coord, GameResult, Player, SubOutcome};
use serde::{Deserialize, Serialize};

/// One 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SubBoard {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl SubBoard {
    /// Creates an empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL.into_iter().filter(|&coord| self.is_empty(coord))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        is_full(&self.marks())
    }

    /// The player with three in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.marks())
    }

    /// Outcome derived from the cells alone.
    pub fn outcome(&self) -> SubOutcome {
        if let Some(player) = self.winner() {
            SubOutcome::Won(player)
        } else if self.is_full() {
            SubOutcome::Drawn
        } else {
            SubOutcome::Undecided
        }
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    fn marks(&self) -> [Option<Player>; 9] {
        self.cells.map(Cell::player)
    }
}

/// The 3x3 grid of sub-board outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MetaBoard {
    /// Outcomes in row-major order, keyed like sub-board indices.
    outcomes: [SubOutcome; 9],
}

impl MetaBoard {
    /// Outcome of the sub-board at the given coordinate.
    pub fn get(&self, coord: Coord) -> SubOutcome {
        self.outcomes[coord.index()]
    }

    /// Returns all outcomes in row-major order.
    pub fn outcomes(&self) -> &[SubOutcome; 9] {
        &self.outcomes
    }

    /// The player owning a line of won sub-boards, if any.
    ///
    /// Drawn sub-boards count for neither player.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.outcomes.map(SubOutcome::winner))
    }

    /// Checks if every sub-board is won or drawn.
    pub fn all_decided(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.is_decided())
    }

    /// Match result derived from the outcomes, recomputed on every call.
    pub fn result(&self) -> Option<GameResult> {
        if let Some(player) = self.winner() {
            Some(GameResult::WonBy(player))
        } else if self.all_decided() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, coord: Coord, outcome: SubOutcome) {
        self.outcomes[coord.index()] = outcome;
    }
}

/// The nine sub-boards together with their meta-board.
///
/// This is the part of the game state the rules and the search act on;
/// turn bookkeeping lives in [`GameState`](super::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    boards: [SubBoard; 9],
    meta: MetaBoard,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sub-board at the given coordinate.
    pub fn sub_board(&self, coord: Coord) -> &SubBoard {
        &self.boards[coord.index()]
    }

    /// The meta-board of sub-board outcomes.
    pub fn meta(&self) -> &MetaBoard {
        &self.meta
    }

    /// Where the opponent must play after a move landed on `cell`.
    ///
    /// The cell position names the next sub-board, unless that sub-board is
    /// already decided, in which case any sub-board may be played.
    pub fn target_after(&self, cell: Coord) -> ActiveTarget {
        if self.meta.get(cell).is_decided() {
            ActiveTarget::Any
        } else {
            ActiveTarget::Board(cell)
        }
    }

    /// Empty cells reachable under `target`, row-major by board then cell.
    ///
    /// A specific target whose sub-board is already decided falls back to
    /// every undecided sub-board. Match termination is not checked here.
    pub fn moves_for(&self, target: ActiveTarget) -> Vec<Move> {
        let only = match target {
            ActiveTarget::Board(board) if !self.meta.get(board).is_decided() => Some(board),
            _ => None,
        };

        Coord::ALL
            .into_iter()
            .filter(|&board| only.is_none_or(|only| only == board))
            .filter(|&board| !self.meta.get(board).is_decided())
            .flat_map(move |board| {
                self.sub_board(board)
                    .empty_cells()
                    .map(move |cell| Move::new(board, cell))
            })
            .collect()
    }

    /// Writes `player`'s mark and refreshes that sub-board's outcome.
    ///
    /// Returns the outcome the sub-board had before, so the caller can undo.
    /// Legality is not checked.
    pub(crate) fn place(&mut self, mv: Move, player: Player) -> SubOutcome {
        let previous = self.meta.get(mv.board);
        let board = &mut self.boards[mv.board.index()];
        board.set(mv.cell, Cell::Occupied(player));
        let outcome = board.outcome();
        self.meta.set(mv.board, outcome);
        previous
    }

    /// Writes `player`'s mark and leaves the meta-board as it was.
    pub(crate) fn mark(&mut self, mv: Move, player: Player) {
        let board = &mut self.boards[mv.board.index()];
        board.set(mv.cell, Cell::Occupied(player));
    }

    /// Reverts a [`place`](Self::place) or a [`mark`](Self::mark).
    pub(crate) fn unplace(&mut self, mv: Move, previous: SubOutcome) {
        self.boards[mv.board.index()].set(mv.cell, Cell::Empty);
        self.meta.set(mv.board, previous);
    }
}
