//! Terminal match driver.
//!
//! Holds a [`GameState`](crate::GameState), asks the participant whose turn
//! it is for a move, applies it, and stops once the match is decided.

mod orchestrator;
mod players;

pub use orchestrator::{Match, MatchSummary};
pub use players::{ComputerPlayer, HumanPlayer, Participant, parse_move};

use crate::search::SearchMode;
use serde::{Deserialize, Serialize};

/// Who plays against whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchMode {
    /// Two humans at the same terminal.
    Pvp,
    /// Human (X) against the random computer (O).
    EasyAi,
    /// Human (X) against the minimax computer (O).
    #[default]
    HardAi,
}

impl MatchMode {
    /// Strategy of the computer opponent, if there is one.
    pub fn computer(self) -> Option<SearchMode> {
        match self {
            MatchMode::Pvp => None,
            MatchMode::EasyAi => Some(SearchMode::Random),
            MatchMode::HardAi => Some(SearchMode::Heuristic),
        }
    }
}
