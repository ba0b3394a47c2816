//! Depth-limited minimax search with alpha-beta pruning
//!
//! The searcher works on a private scratch copy of the board and walks the
//! move tree with paired make/undo calls: every candidate move is applied,
//! evaluated recursively, then undone before the next candidate is tried,
//! including when a cutoff stops sibling enumeration early. Red maximizes
//! and blue minimizes, selected by a signed sense value.
//!
//! Only the root call records which move produced the best score; interior
//! nodes report scores alone, so a child's best line is never mistaken for
//! the move made at the root.

use crate::board::{Board, Move, PieceColor, Square, SIDE};
use crate::eval::static_score;

/// Default maximum search depth before falling back to static evaluation.
pub const MAX_DEPTH: i8 = 4;

/// Score magnitude indicating a won game (for red if positive, blue if
/// negative). The remaining depth is added on top so that wins found
/// sooner outrank wins found deeper.
pub(crate) const WINNING_VALUE: i32 = 1_000_000;

/// A magnitude strictly greater than any reachable score.
const INFTY: i32 = WINNING_VALUE + 1_000;

/// Result of one search: the move chosen at the root plus statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found at the root.
    pub best_move: Option<Move>,
    /// Minimax value of the root position.
    pub score: i32,
    /// Nodes visited, terminal evaluations included.
    pub nodes: u64,
}

/// Minimax searcher. Stateless between searches except for the best move
/// of the most recent invocation.
pub struct Searcher {
    last_found_move: Option<Move>,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_found_move: None,
            nodes: 0,
        }
    }

    /// Search `board` to `depth` plies for the side `color` and return the
    /// best root move found. The search runs on a private clone of
    /// `board`; the original is never touched.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no legal move: passing is not found by
    /// search, so callers must check `can_move` first.
    pub fn search(&mut self, board: &Board, color: PieceColor, depth: i8) -> SearchResult {
        assert!(
            board.can_move(color),
            "search requires a movable position; check can_move first"
        );
        debug_assert_eq!(board.whose_move(), color);
        let mut scratch = board.clone();
        self.nodes = 0;
        self.last_found_move = None;
        let sense = if color == PieceColor::Red { 1 } else { -1 };
        let score = self.min_max(&mut scratch, depth, true, sense, -INFTY, INFTY);
        SearchResult {
            best_move: self.last_found_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Value of `board` searched to `depth` within the (`alpha`, `beta`)
    /// window. The move producing the value is recorded only when
    /// `save_move` is set, which happens for the root call alone. At depth
    /// zero, or when the position is already decided, returns the static
    /// score with the remaining depth folded into the winning magnitude.
    fn min_max(
        &mut self,
        board: &mut Board,
        depth: i8,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || board.winner().is_some() {
            return static_score(board, WINNING_VALUE + i32::from(depth));
        }

        let mut candidates = legal_moves(board);
        if candidates.is_empty() {
            // Stuck but not over: the only legal continuation is a pass.
            candidates.push(Move::Pass);
        }

        let mut best = None;
        let mut best_so_far = if sense > 0 { -INFTY } else { INFTY };
        if sense > 0 {
            for &mv in &candidates {
                board.make_move(mv).expect("generated moves are legal");
                let response = self.min_max(board, depth - 1, false, -1, alpha, beta);
                board.undo();
                if response > best_so_far {
                    best_so_far = response;
                    best = Some(mv);
                    alpha = alpha.max(best_so_far);
                    if alpha >= beta {
                        break;
                    }
                }
            }
        } else {
            for &mv in &candidates {
                board.make_move(mv).expect("generated moves are legal");
                let response = self.min_max(board, depth - 1, false, 1, alpha, beta);
                board.undo();
                if response < best_so_far {
                    best_so_far = response;
                    best = Some(mv);
                    beta = beta.min(best_so_far);
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }
        if save_move {
            self.last_found_move = best;
        }
        best_so_far
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumerate every legal step for the side to move, in a fixed
/// deterministic order: source squares column-major over the playable
/// area, offsets `dc` then `dr` in [-2, 2]. Passes are never generated
/// here; a pass arises only through the no-legal-move path.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for col in 0..SIDE as i32 {
        for row in 0..SIDE as i32 {
            for dc in -2..=2 {
                for dr in -2..=2 {
                    if !Square::in_range(col + dc, row + dr) {
                        continue;
                    }
                    let mv = Move::step(
                        Square::new(col as u8, row as u8),
                        Square::new((col + dc) as u8, (row + dr) as u8),
                    );
                    if board.legal_move(mv) {
                        moves.push(mv);
                    }
                }
            }
        }
    }
    moves
}
