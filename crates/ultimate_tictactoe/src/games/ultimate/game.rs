//! Game state and move application for ultimate tic-tac-toe.

use super::action::{Move, MoveError};
use super::board::{Grid, MetaBoard, SubBoard};
use super::types::{ActiveTarget, Cell, Coord, GameResult, Player, SubOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete state of one match.
///
/// Created fresh for each match and mutated in place by
/// [`apply_move`](Self::apply_move). The turn is only flipped by the driver
/// (see [`switch_player`](Self::switch_player) and [`play`](Self::play)),
/// so the rules can be applied on behalf of either player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Sub-boards and meta-board.
    grid: Grid,
    /// Player to move.
    current_player: Player,
    /// Where the next move must land.
    active_target: ActiveTarget,
    /// Moves applied so far, in order.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new match: all cells empty, any board playable, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            current_player: Player::X,
            active_target: ActiveTarget::Any,
            history: Vec::new(),
        }
    }

    /// Discards the current match and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the grid of sub-boards and their outcomes.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the sub-board at the given coordinate.
    pub fn sub_board(&self, coord: Coord) -> &SubBoard {
        self.grid.sub_board(coord)
    }

    /// Returns the meta-board.
    pub fn meta_board(&self) -> &MetaBoard {
        self.grid.meta()
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns where the next move must land.
    pub fn active_target(&self) -> ActiveTarget {
        self.active_target
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// All legal moves, row-major by board then cell.
    ///
    /// Empty once the match is finished.
    #[instrument(skip(self), fields(target = %self.active_target))]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_finished() {
            return Vec::new();
        }
        self.grid.moves_for(self.active_target)
    }

    /// Checks whether a move is legal right now.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Places `player`'s mark and returns the new active target.
    ///
    /// Does not change [`current_player`](Self::current_player).
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the match is over, the cell is occupied,
    /// the sub-board is decided, or the move is outside the active target.
    #[instrument(skip(self), fields(mv = %mv, player = %player))]
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<ActiveTarget, MoveError> {
        if let Err(e) = self.validate(mv) {
            warn!(error = %e, "Rejected move");
            return Err(e);
        }

        self.grid.place(mv, player);
        self.history.push(mv);
        self.active_target = self.grid.target_after(mv.cell);

        debug!(
            outcome = ?self.grid.meta().get(mv.board),
            target = %self.active_target,
            "Move applied"
        );
        Ok(self.active_target)
    }

    /// Flips the player to move.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Applies a move for the current player and hands the turn over.
    ///
    /// The turn is kept when the move finishes the match, so
    /// [`current_player`](Self::current_player) names the last mover.
    ///
    /// # Errors
    ///
    /// Same as [`apply_move`](Self::apply_move).
    pub fn play(&mut self, mv: Move) -> Result<ActiveTarget, MoveError> {
        let target = self.apply_move(mv, self.current_player)?;
        if !self.is_finished() {
            self.switch_player();
        }
        Ok(target)
    }

    /// Checks if the match is over.
    pub fn is_finished(&self) -> bool {
        self.result().is_some()
    }

    /// The match result, derived from the meta-board on every call.
    pub fn result(&self) -> Option<GameResult> {
        self.grid.meta().result()
    }

    /// Formats the nine sub-boards as a 9x9 text grid.
    ///
    /// A footer line lists the meta-board outcomes (`=` for drawn) and the
    /// active target.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for board_row in 0..3 {
            for cell_row in 0..3 {
                let line = (0..3)
                    .map(|col| self.row_text(board_row * 3 + col, cell_row))
                    .collect::<Vec<_>>()
                    .join(" | ");
                out.push_str(&line);
                out.push('\n');
            }
            if board_row < 2 {
                out.push_str("----+-----+----\n");
            }
        }

        let meta = self
            .meta_board()
            .outcomes()
            .iter()
            .map(|outcome| match outcome {
                SubOutcome::Undecided => '.',
                SubOutcome::Won(Player::X) => 'X',
                SubOutcome::Won(Player::O) => 'O',
                SubOutcome::Drawn => '=',
            })
            .collect::<String>();
        let footer = format!("meta: {}  next: {}", meta, self.active_target);
        out.push_str(&footer);
        out
    }

    /// One row of the sub-board at `board` (row-major index), e.g. `X.O`.
    fn row_text(&self, board: usize, cell_row: usize) -> String {
        let board = self.sub_board(Coord::ALL[board]);
        Coord::ALL[cell_row * 3..cell_row * 3 + 3]
            .iter()
            .map(|&cell| match board.get(cell) {
                Cell::Empty => '.',
                Cell::Occupied(Player::X) => 'X',
                Cell::Occupied(Player::O) => 'O',
            })
            .collect()
    }

    fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        if self.grid.meta().get(mv.board).is_decided() {
            return Err(MoveError::BoardDecided(mv));
        }
        if !self.grid.sub_board(mv.board).is_empty(mv.cell) {
            return Err(MoveError::CellOccupied(mv));
        }
        if let ActiveTarget::Board(target) = self.active_target
            && target != mv.board
        {
            return Err(MoveError::WrongBoard {
                mv,
                target: self.active_target,
            });
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
