//! Match orchestration between two participants.

use super::players::Participant;
use crate::games::ultimate::{GameResult, GameState, Player};
use anyhow::Result;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MatchSummary {
    /// Final result, or `None` if a participant stopped before the end.
    pub result: Option<GameResult>,
    /// Number of moves played.
    pub moves: usize,
}

/// Who sits on which side.
enum Seats {
    /// One participant per side.
    Separate {
        x: Box<dyn Participant>,
        o: Box<dyn Participant>,
    },
    /// One participant moving for both sides (hot seat).
    Shared(Box<dyn Participant>),
}

impl Seats {
    fn get(&mut self, player: Player) -> &mut dyn Participant {
        match (self, player) {
            (Seats::Separate { x, .. }, Player::X) => x.as_mut(),
            (Seats::Separate { o, .. }, Player::O) => o.as_mut(),
            (Seats::Shared(both), _) => both.as_mut(),
        }
    }

    fn names(&self) -> (&str, &str) {
        match self {
            Seats::Separate { x, o } => (x.name(), o.name()),
            Seats::Shared(both) => (both.name(), both.name()),
        }
    }
}

/// Runs one match between two participants.
pub struct Match {
    game: GameState,
    seats: Seats,
}

impl Match {
    /// Creates a match with a fresh game.
    pub fn new(player_x: Box<dyn Participant>, player_o: Box<dyn Participant>) -> Self {
        Self {
            game: GameState::new(),
            seats: Seats::Separate {
                x: player_x,
                o: player_o,
            },
        }
    }

    /// Creates a match where one participant moves for both sides.
    pub fn hot_seat(players: Box<dyn Participant>) -> Self {
        Self {
            game: GameState::new(),
            seats: Seats::Shared(players),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Starts over with an empty board and the same participants.
    pub fn restart(&mut self) {
        self.game.reset();
    }

    /// Plays until the match is decided or a participant offers no move.
    ///
    /// # Errors
    ///
    /// Propagates participant I/O errors and illegal moves.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<MatchSummary> {
        let (x, o) = self.seats.names();
        info!(x, o, "Starting match");

        loop {
            if let Some(result) = self.game.result() {
                info!(%result, moves = self.game.move_count(), "Match finished");
                return Ok(MatchSummary::new(Some(result), self.game.move_count()));
            }

            let to_move = self.game.current_player();
            let Some(mv) = self.seats.get(to_move).choose_move(&self.game)? else {
                info!(player = %to_move, "No move offered, stopping match");
                return Ok(MatchSummary::new(None, self.game.move_count()));
            };

            let target = self.game.play(mv)?;
            debug!(player = %to_move, mv = %mv, next = %target, "Move played");
        }
    }
}
