//! Main AI engine facade
//!
//! Wraps the alpha-beta searcher behind the one operation an orchestrator
//! needs: given a board and a color, produce the move to play. The facade
//! owns the mandatory pass check: when the side to move has no step, it
//! answers with a pass immediately and never invokes the search, which
//! treats an unmovable position as a contract violation.
//!
//! # Example
//!
//! ```
//! use ataxx::{Board, Engine, PieceColor};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::with_depth(3);
//!
//! let mv = engine.find_move(&board, PieceColor::Red);
//! assert!(board.legal_move(mv));
//! board.make_move(mv).unwrap();
//! ```

use crate::board::{Board, Move, PieceColor};
use crate::search::{SearchResult, Searcher, MAX_DEPTH};

/// AI engine: fixed-depth minimax with alpha-beta pruning behind a pass
/// check.
pub struct Engine {
    searcher: Searcher,
    max_depth: i8,
}

impl Engine {
    /// Engine with the default search depth.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth: MAX_DEPTH,
        }
    }

    /// Engine searching to `depth` plies instead of the default.
    #[must_use]
    pub fn with_depth(depth: i8) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth: depth,
        }
    }

    /// The move `color` should play on `board`.
    ///
    /// Returns a pass immediately when `color` cannot move; otherwise runs
    /// a fixed-depth search on a private copy of the board. The caller is
    /// responsible for applying the move to its canonical board.
    #[must_use]
    pub fn find_move(&mut self, board: &Board, color: PieceColor) -> Move {
        self.find_move_with_stats(board, color)
            .best_move
            .expect("a movable position always yields a move")
    }

    /// Like [`Self::find_move`], returning the search score and node count
    /// as well. A forced pass reports a zero score and no nodes searched.
    #[must_use]
    pub fn find_move_with_stats(&mut self, board: &Board, color: PieceColor) -> SearchResult {
        if !board.can_move(color) {
            return SearchResult {
                best_move: Some(Move::Pass),
                score: 0,
                nodes: 0,
            };
        }
        self.searcher.search(board, color, self.max_depth)
    }

    /// Set the maximum search depth.
    pub fn set_max_depth(&mut self, depth: i8) {
        self.max_depth = depth;
    }

    /// Get the current maximum search depth.
    #[must_use]
    pub fn max_depth(&self) -> i8 {
        self.max_depth
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
