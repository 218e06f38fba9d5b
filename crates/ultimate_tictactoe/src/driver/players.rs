//! Participants that can supply moves.

use crate::games::ultimate::{GameState, Move, Player};
use crate::search::MoveSearch;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Something that chooses moves for one side of a match.
pub trait Participant {
    /// Chooses the next move for the player to move.
    ///
    /// `Ok(None)` means the participant has no move to offer (a human who
    /// quit, or a computer with no legal move); the match stops there.
    fn choose_move(&mut self, game: &GameState) -> Result<Option<Move>>;

    /// Returns the participant's display name.
    fn name(&self) -> &str;
}

/// Parses `"br bc cr cc"` (spaces and/or commas) into a move.
pub fn parse_move(input: &str) -> Option<Move> {
    let parts: Vec<u8> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<u8>)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        &[br, bc, cr, cc] => Move::from_tuple((br, bc, cr, cc)),
        _ => None,
    }
}

/// A human entering moves as text.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Participant for HumanPlayer<R, W> {
    #[instrument(skip(self, game), fields(human = %self.name))]
    fn choose_move(&mut self, game: &GameState) -> Result<Option<Move>> {
        writeln!(self.output, "\n{}\n", game)?;

        loop {
            write!(
                self.output,
                "{} ({}), enter board_row board_col cell_row cell_col: ",
                self.name,
                game.current_player()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            let line = line.trim();
            if matches!(line, "q" | "quit") {
                return Ok(None);
            }

            let Some(mv) = parse_move(line) else {
                writeln!(
                    self.output,
                    "Could not read '{}', expected four numbers 0-2.",
                    line
                )?;
                continue;
            };

            if game.is_legal(mv) {
                return Ok(Some(mv));
            }
            warn!(mv = %mv, "Illegal move entered");
            writeln!(
                self.output,
                "Move {} is not legal, play in {}.",
                mv,
                game.active_target()
            )?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A computer player backed by [`MoveSearch`].
pub struct ComputerPlayer {
    name: String,
    search: MoveSearch,
}

impl ComputerPlayer {
    /// Creates a computer player.
    pub fn new(name: impl Into<String>, search: MoveSearch) -> Self {
        Self {
            name: name.into(),
            search,
        }
    }
}

impl Participant for ComputerPlayer {
    fn choose_move(&mut self, game: &GameState) -> Result<Option<Move>> {
        let player: Player = game.current_player();
        debug!(computer = %self.name, %player, "Computer thinking");
        Ok(self.search.select_move(game, player))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
