//! Game rules for ultimate tic-tac-toe.
//!
//! Pure line and fullness checks over a 3x3 grid of marks. The same rules
//! decide a sub-board from its cells and the match from the meta-board, so
//! they work on plain `Option<Player>` grids rather than either board type.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
