//! Error types for the Ataxx engine
//!
//! Illegal operations are caller contract violations: they are reported at
//! the point of the call and never partially applied to the board.

use thiserror::Error;

use crate::board::{Move, Square};

/// Errors that can occur operating on a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move rejected by the legality check
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// Block placed after moves have begun, or on a non-empty square
    #[error("illegal block placement at {square}")]
    IllegalBlock { square: Square },

    /// Move text that is not `"-"` or `"c0r0-c1r1"` with valid coordinates
    #[error("malformed move text: {text:?}")]
    MalformedMove { text: String },

    /// Square text that is not a column `a`-`g` followed by a row `1`-`7`
    #[error("malformed square text: {text:?}")]
    MalformedSquare { text: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
