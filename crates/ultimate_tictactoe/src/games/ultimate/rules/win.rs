//! Win detection over a 3x3 grid.

use super::super::Player;
use tracing::instrument;

/// The eight winning lines as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if a player owns a full line of the grid.
///
/// Returns `Some(player)` for three in a row, `None` otherwise. Empty
/// entries (`None`) never form a line.
#[instrument(level = "trace")]
pub fn check_winner(grid: &[Option<Player>; 9]) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match grid[a] {
        Some(player) if grid[b] == Some(player) && grid[c] == Some(player) => Some(player),
        _ => None,
    })
}
