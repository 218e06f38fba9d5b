//! Depth-limited minimax over the meta-board heuristic (hard AI).
//!
//! The root scans the legal moves in generation order and keeps the first
//! move whose score is strictly better than everything seen before. Each
//! child is scored by a fixed-depth minimax whose only leaf signal is the
//! static meta-board evaluation; sub-board wins or a finished match inside
//! the tree are not treated specially.
//!
//! Trial moves are played on one scratch [`Grid`] and reverted by a
//! [`Trial`] guard when it goes out of scope, so sibling candidates always
//! see the same position. By default a trial move only writes its cell: the
//! meta-board keeps the outcomes it had at the root, so move generation and
//! the leaf evaluation both read the root outcomes. Setting
//! [`Minimax::track_outcomes`] refreshes sub-board outcomes inside the tree
//! instead.

use crate::games::ultimate::{ActiveTarget, Grid, MetaBoard, Move, Player, SubOutcome};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Static evaluation used at the leaves.
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
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Evaluation {
    /// +1 per sub-board won by O, -1 per sub-board won by X, whoever searches.
    #[default]
    Fixed,
    /// +1 per sub-board won by the searching player, -1 per opponent win.
    SideRelative,
}

/// Scores a meta-board: +1 for each sub-board won by O, -1 for each won by X.
pub fn evaluate(meta: &MetaBoard) -> i32 {
    evaluate_for(meta, Player::O)
}

/// Scores a meta-board from `player`'s side.
pub fn evaluate_for(meta: &MetaBoard, player: Player) -> i32 {
    meta.outcomes()
        .iter()
        .map(|outcome| match outcome {
            SubOutcome::Won(owner) if *owner == player => 1,
            SubOutcome::Won(_) => -1,
            SubOutcome::Undecided | SubOutcome::Drawn => 0,
        })
        .sum()
}

/// A move played on the scratch grid, undone on drop.
struct Trial<'a> {
    grid: &'a mut Grid,
    mv: Move,
    previous: SubOutcome,
}

impl<'a> Trial<'a> {
    fn place(grid: &'a mut Grid, mv: Move, player: Player, track_outcomes: bool) -> Self {
        let previous = if track_outcomes {
            grid.place(mv, player)
        } else {
            grid.mark(mv, player);
            grid.meta().get(mv.board)
        };
        Self { grid, mv, previous }
    }
}

impl Deref for Trial<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &*self.grid
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        &mut *self.grid
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.grid.unplace(self.mv, self.previous);
    }
}

/// Search parameters for one root call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    /// Plies searched below each root candidate.
    pub depth: u32,
    /// Leaf evaluation.
    pub evaluation: Evaluation,
    /// Alpha-beta cutoffs. Never changes the chosen move.
    pub pruning: bool,
    /// Refresh sub-board outcomes on the scratch meta-board after each
    /// trial move. Off by default.
    pub track_outcomes: bool,
}

impl Minimax {
    /// Returns the best move for `player`, or `None` if there is no legal move.
    #[instrument(
        skip(self, grid),
        fields(
            depth = self.depth,
            evaluation = %self.evaluation,
            track_outcomes = self.track_outcomes
        )
    )]
    pub fn best_move(&self, grid: &Grid, target: ActiveTarget, player: Player) -> Option<Move> {
        let mut scratch = *grid;
        let mut best: Option<(Move, i32)> = None;

        for mv in grid.moves_for(target) {
            let alpha = best.map_or(i32::MIN, |(_, score)| score);
            let score = {
                let mut trial = Trial::place(&mut scratch, mv, player, self.track_outcomes);
                let next = trial.target_after(mv.cell);
                self.score(
                    &mut trial,
                    next,
                    player.opponent(),
                    false,
                    self.depth,
                    player,
                    alpha,
                    i32::MAX,
                )
            };
            trace!(mv = %mv, score, "Root candidate scored");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        debug_assert_eq!(&scratch, grid, "Trial moves must be fully reverted");
        if let Some((mv, score)) = best {
            debug!(mv = %mv, score, "Best move selected");
        }
        best.map(|(mv, _)| mv)
    }

    #[allow(clippy::too_many_arguments)]
    fn score(
        &self,
        grid: &mut Grid,
        target: ActiveTarget,
        to_move: Player,
        maximizing: bool,
        depth: u32,
        root: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 {
            return match self.evaluation {
                Evaluation::Fixed => evaluate(grid.meta()),
                Evaluation::SideRelative => evaluate_for(grid.meta(), root),
            };
        }

        let moves = grid.moves_for(target);
        if moves.is_empty() {
            return 0;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let value = {
                let mut trial = Trial::place(grid, mv, to_move, self.track_outcomes);
                let next = trial.target_after(mv.cell);
                self.score(
                    &mut trial,
                    next,
                    to_move.opponent(),
                    !maximizing,
                    depth - 1,
                    root,
                    alpha,
                    beta,
                )
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }
        best
    }
}
