//! Static evaluation of Ataxx positions
//!
//! The evaluator is deliberately simple: a decided game scores plus or
//! minus the supplied winning magnitude (zero for a draw), and anything
//! else scores as the material difference, red minus blue. Scores are
//! always red-positive; the minimizing side of the search prefers low.

use crate::board::{Board, GameOutcome, PieceColor};

/// Score `board` from red's perspective.
///
/// `winning_value` is the magnitude reported for a decided game. The
/// search passes its winning constant plus the remaining depth, so a
/// forced win found sooner scores strictly higher in magnitude than one
/// found deeper.
#[must_use]
pub fn static_score(board: &Board, winning_value: i32) -> i32 {
    match board.winner() {
        Some(GameOutcome::Winner(PieceColor::Red)) => winning_value,
        Some(GameOutcome::Winner(_)) => -winning_value,
        Some(GameOutcome::Draw) => 0,
        None => board.red_pieces() as i32 - board.blue_pieces() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_level() {
        let board = Board::new();
        assert_eq!(static_score(&board, 1_000), 0);
    }

    #[test]
    fn test_material_difference() {
        let mut board = Board::new();
        // Red extend adds one red piece with nothing to flip
        board.make_text_move("a7-a6").unwrap();
        assert_eq!(static_score(&board, 1_000), 1);
        // Blue answers in kind
        board.make_text_move("a1-b2").unwrap();
        assert_eq!(static_score(&board, 1_000), 0);
    }
}
