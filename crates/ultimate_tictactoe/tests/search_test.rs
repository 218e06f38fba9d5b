//! Tests for computer move selection.

mod common;

use common::{X_TOP_ROW_WIN, mv, replay};
use ultimate_tictactoe::{
    ActiveTarget, Coord, DEFAULT_DEPTH, Evaluation, GameState, Move, MoveSearch, Player, SearchMode,
    evaluate,
};

#[test]
fn test_heuristic_is_deterministic() {
    let game = replay(&[(1, 1, 0, 0), (0, 0, 2, 2), (2, 2, 1, 1)]);

    let mut first = MoveSearch::new(SearchMode::Heuristic);
    let mut second = MoveSearch::new(SearchMode::Heuristic);
    let chosen = first.select_move(&game, game.current_player());

    assert!(chosen.is_some());
    assert_eq!(first.select_move(&game, game.current_player()), chosen);
    assert_eq!(second.select_move(&game, game.current_player()), chosen);
}

#[test]
fn test_search_leaves_state_untouched() {
    let game = replay(&[(1, 1, 0, 0), (0, 0, 1, 1)]);
    let before = game.clone();

    for mode in [SearchMode::Random, SearchMode::Heuristic] {
        let mut search = MoveSearch::new(mode).with_seed(9);
        let chosen = search.select_move(&game, game.current_player()).unwrap();
        assert!(game.legal_moves().contains(&chosen));
    }
    assert_eq!(game, before);
}

#[test]
fn test_ties_keep_first_move() {
    // Nothing can be won within reach, so every candidate scores 0.
    let game = replay(&[]);
    let mut search = MoveSearch::new(SearchMode::Heuristic).with_depth(2);
    assert_eq!(search.select_move(&game, Player::X), Some(mv(0, 0, 0, 0)));
}

/// Minimax that writes and erases cells only. Sub-board outcomes keep the
/// values they had before the search, so every leaf scores the same meta-board.
struct CellOnlyMinimax {
    cells: [[Option<Player>; 9]; 9],
    decided: [bool; 9],
    leaf: i32,
}

impl CellOnlyMinimax {
    fn new(game: &GameState) -> Self {
        let mut cells = [[None; 9]; 9];
        let mut decided = [false; 9];
        for board in Coord::ALL {
            decided[board.index()] = game.meta_board().get(board).is_decided();
            for cell in Coord::ALL {
                cells[board.index()][cell.index()] = game.sub_board(board).get(cell).player();
            }
        }
        Self {
            cells,
            decided,
            leaf: evaluate(game.meta_board()),
        }
    }

    fn moves(&self, target: ActiveTarget) -> Vec<Move> {
        let boards = match target {
            ActiveTarget::Board(board) if !self.decided[board.index()] => vec![board],
            _ => Coord::ALL.to_vec(),
        };
        let mut moves = Vec::new();
        for board in boards {
            if self.decided[board.index()] {
                continue;
            }
            for cell in Coord::ALL {
                if self.cells[board.index()][cell.index()].is_none() {
                    moves.push(Move::new(board, cell));
                }
            }
        }
        moves
    }

    fn target_after(&self, cell: Coord) -> ActiveTarget {
        if self.decided[cell.index()] {
            ActiveTarget::Any
        } else {
            ActiveTarget::Board(cell)
        }
    }

    fn set(&mut self, mv: Move, mark: Option<Player>) {
        self.cells[mv.board.index()][mv.cell.index()] = mark;
    }

    fn score(&mut self, target: ActiveTarget, to_move: Player, is_max: bool, depth: u32) -> i32 {
        if depth == 0 {
            return self.leaf;
        }
        let moves = self.moves(target);
        if moves.is_empty() {
            return 0;
        }

        let mut best = if is_max { i32::MIN } else { i32::MAX };
        for mv in moves {
            self.set(mv, Some(to_move));
            let next = self.target_after(mv.cell);
            let value = self.score(next, to_move.opponent(), !is_max, depth - 1);
            self.set(mv, None);
            if is_max {
                best = best.max(value);
            } else {
                best = best.min(value);
            }
        }
        best
    }

    fn best_move(&mut self, target: ActiveTarget, player: Player, depth: u32) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;
        for mv in self.moves(target) {
            self.set(mv, Some(player));
            let next = self.target_after(mv.cell);
            let score = self.score(next, player.opponent(), false, depth);
            self.set(mv, None);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

fn assert_matches_cell_only(game: &GameState, depth: u32) {
    let player = game.current_player();
    let mut search = MoveSearch::new(SearchMode::Heuristic).with_depth(depth);
    let mut reference = CellOnlyMinimax::new(game);
    let expected = reference.best_move(game.active_target(), player, depth);
    assert_eq!(
        search.select_move(game, player),
        expected,
        "after {:?}",
        game.history()
    );
}

/// O holds (0,2) and (1,1) of board (0,0); (2,0) completes the diagonal.
const O_THREATENS_CORNER: [(u8, u8, u8, u8); 5] = [
    (2, 2, 0, 0),
    (0, 0, 0, 2),
    (0, 2, 0, 0),
    (0, 0, 1, 1),
    (1, 1, 0, 0),
];

#[test]
fn test_sub_board_win_inside_tree_is_not_scored() {
    let game = replay(&O_THREATENS_CORNER);
    assert_eq!(game.current_player(), Player::O);

    // No sub-board is decided yet, so every candidate scores the same.
    let mut search = MoveSearch::new(SearchMode::Heuristic);
    assert_eq!(search.select_move(&game, Player::O), Some(mv(0, 0, 0, 0)));
    assert_matches_cell_only(&game, DEFAULT_DEPTH);
}

#[test]
fn test_default_search_matches_cell_only_minimax() {
    // Three sub-boards decided: leaves score -1 while exhausted targets score 0.
    let game = replay(&X_TOP_ROW_WIN[..16]);
    assert_eq!(evaluate(game.meta_board()), -1);
    for depth in 1..=DEFAULT_DEPTH {
        assert_matches_cell_only(&game, depth);
    }
}

#[test]
fn test_default_search_matches_cell_only_minimax_over_playout() {
    let mut game = replay(&[]);
    let mut random = MoveSearch::new(SearchMode::Random).with_seed(11);
    for _ in 0..40 {
        if game.is_finished() {
            break;
        }
        assert_matches_cell_only(&game, 2);
        let next = random.select_move(&game, game.current_player()).unwrap();
        game.play(next).unwrap();
    }
}

#[test]
fn test_outcome_tracking_takes_sub_board() {
    let game = replay(&O_THREATENS_CORNER);

    let mut search = MoveSearch::new(SearchMode::Heuristic)
        .with_depth(DEFAULT_DEPTH)
        .with_outcome_tracking(true);
    assert_eq!(search.select_move(&game, Player::O), Some(mv(0, 0, 2, 0)));
}

#[test]
fn test_side_relative_evaluation_for_x() {
    // Mirror image: X holds (0,2) and (1,1) of board (0,0).
    let game = replay(&[(0, 0, 0, 2), (0, 2, 0, 0), (0, 0, 1, 1), (1, 1, 0, 0)]);
    assert_eq!(game.current_player(), Player::X);

    let mut relative = MoveSearch::new(SearchMode::Heuristic)
        .with_evaluation(Evaluation::SideRelative)
        .with_outcome_tracking(true);
    assert_eq!(relative.select_move(&game, Player::X), Some(mv(0, 0, 2, 0)));

    // The fixed evaluation always favours O, so X steers away from the win.
    let mut fixed = MoveSearch::new(SearchMode::Heuristic)
        .with_evaluation(Evaluation::Fixed)
        .with_outcome_tracking(true);
    assert_eq!(fixed.select_move(&game, Player::X), Some(mv(0, 0, 0, 0)));
}

#[test]
fn test_pruning_does_not_change_choice() {
    let game = replay(&[
        (1, 1, 0, 0),
        (0, 0, 2, 2),
        (2, 2, 1, 1),
        (1, 1, 2, 0),
        (2, 0, 0, 1),
        (0, 1, 1, 1),
        (1, 1, 1, 2),
    ]);
    let player = game.current_player();
    for evaluation in [Evaluation::Fixed, Evaluation::SideRelative] {
        for track_outcomes in [false, true] {
            let mut plain = MoveSearch::new(SearchMode::Heuristic)
                .with_evaluation(evaluation)
                .with_outcome_tracking(track_outcomes)
                .with_pruning(false);
            let mut pruned = MoveSearch::new(SearchMode::Heuristic)
                .with_evaluation(evaluation)
                .with_outcome_tracking(track_outcomes);
            assert_eq!(
                plain.select_move(&game, player),
                pruned.select_move(&game, player)
            );
        }
    }
}

#[test]
fn test_random_is_reproducible_with_seed() {
    let game = replay(&[(1, 1, 1, 1)]);
    let pick = |seed| {
        MoveSearch::new(SearchMode::Random)
            .with_seed(seed)
            .select_move(&game, Player::O)
    };
    assert_eq!(pick(5), pick(5));
    assert_eq!(pick(5).unwrap().board, Coord::CENTER);
}

#[test]
fn test_finished_game_has_no_move() {
    let game = replay(&X_TOP_ROW_WIN);
    assert!(game.is_finished());

    for mode in [SearchMode::Random, SearchMode::Heuristic] {
        let mut search = MoveSearch::new(mode);
        assert_eq!(search.select_move(&game, Player::O), None);
    }
}
