//! Uniform random move selection (easy AI).

use crate::games::ultimate::Move;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one of `moves` uniformly at random, or `None` if there are none.
pub fn select<R: Rng>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}
