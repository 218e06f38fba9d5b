//! Fullness detection over a 3x3 grid.

/// Checks if every entry of the grid is set.
///
/// A full grid with no winner is a draw.
pub fn is_full<T>(grid: &[Option<T>; 9]) -> bool {
    grid.iter().all(Option::is_some)
}
