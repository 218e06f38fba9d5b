//! Computer move selection.
//!
//! [`MoveSearch`] picks a move for either player from a [`GameState`]
//! without modifying it. Two strategies are available: uniform random
//! (easy) and depth-limited minimax over the meta-board (hard).

pub mod minimax;
pub mod random;

pub use minimax::{Evaluation, Minimax, evaluate, evaluate_for};

use crate::games::ultimate::{GameState, Move, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Plies searched below each root candidate by default.
pub const DEFAULT_DEPTH: u32 = 3;

/// Move selection strategy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchMode {
    /// Uniformly random legal move.
    Random,
    /// Depth-limited minimax.
    Heuristic,
}

/// Selects moves for a computer player.
#[derive(Debug, Clone)]
pub struct MoveSearch {
    mode: SearchMode,
    minimax: Minimax,
    rng: StdRng,
}

impl MoveSearch {
    /// Creates a search with the default depth, fixed evaluation and an
    /// entropy-seeded random source.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            minimax: Minimax {
                depth: DEFAULT_DEPTH,
                evaluation: Evaluation::default(),
                pruning: true,
                track_outcomes: false,
            },
            rng: StdRng::from_entropy(),
        }
    }

    /// Sets the minimax depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.minimax.depth = depth;
        self
    }

    /// Seeds the random source so random selection is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the leaf evaluation.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.minimax.evaluation = evaluation;
        self
    }

    /// Enables or disables alpha-beta cutoffs.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.minimax.pruning = pruning;
        self
    }

    /// Refreshes sub-board outcomes during look-ahead, so sub-boards won
    /// inside the tree score at the leaves and close for later moves.
    pub fn with_outcome_tracking(mut self, track_outcomes: bool) -> Self {
        self.minimax.track_outcomes = track_outcomes;
        self
    }

    /// Returns the strategy.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Returns the minimax depth.
    pub fn depth(&self) -> u32 {
        self.minimax.depth
    }

    /// Checks if look-ahead refreshes sub-board outcomes.
    pub fn tracks_outcomes(&self) -> bool {
        self.minimax.track_outcomes
    }

    /// Selects a move for `player`, or `None` if there is no legal move.
    ///
    /// `state` is never modified.
    #[instrument(skip(self, state), fields(mode = %self.mode, target = %state.active_target()))]
    pub fn select_move(&mut self, state: &GameState, player: Player) -> Option<Move> {
        let selected = match self.mode {
            SearchMode::Random => random::select(&state.legal_moves(), &mut self.rng),
            SearchMode::Heuristic if state.is_finished() => None,
            SearchMode::Heuristic => {
                let target = state.active_target();
                self.minimax.best_move(state.grid(), target, player)
            }
        };

        match selected {
            Some(mv) => debug!(mv = %mv, "Move selected"),
            None => debug!("No move available"),
        }
        selected
    }
}
