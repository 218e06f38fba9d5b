//! Ultimate tic-tac-toe: nine sub-boards played as one meta game.

mod action;
mod board;
mod game;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{Grid, MetaBoard, SubBoard};
pub use game::GameState;
pub use types::{ActiveTarget, Cell, Coord, GameResult, Player, SubOutcome};
