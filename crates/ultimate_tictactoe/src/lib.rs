//! Ultimate tic-tac-toe library - rule engine and computer opponent
//!
//! Nine 3x3 sub-boards are played as one meta game: the cell a player picks
//! decides which sub-board the opponent must play in next.
//!
//! # Architecture
//!
//! - **Games**: game state, move legality, sub-board and match outcomes
//! - **Search**: random and minimax move selection
//! - **Driver**: terminal participants and the match loop
//! - **Config**: TOML settings for the `uttt` binary
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{GameState, MoveSearch, SearchMode};
//!
//! let mut game = GameState::new();
//! let mut search = MoveSearch::new(SearchMode::Heuristic).with_depth(2);
//!
//! let mv = search.select_move(&game, game.current_player()).unwrap();
//! game.play(mv).unwrap();
//! assert_eq!(game.move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod driver;
mod games;
mod search;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Driver
pub use driver::{
    ComputerPlayer, HumanPlayer, Match, MatchMode, MatchSummary, Participant, parse_move,
};

// Crate-level exports - Search
pub use search::{
    DEFAULT_DEPTH, Evaluation, Minimax, MoveSearch, SearchMode, evaluate, evaluate_for,
};

// Crate-level exports - Game types
pub use games::ultimate::{
    ActiveTarget, Cell, Coord, GameResult, GameState, Grid, MetaBoard, Move, MoveError, Player,
    SubBoard, SubOutcome, rules,
};
