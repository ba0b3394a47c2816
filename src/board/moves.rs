//! Move representation and text encoding
//!
//! A move's canonical text form is `"c0r0-c1r1"` (for example `"a7-a6"`);
//! a pass is the single character `"-"`. Parsing rejects malformed text as
//! an error, never a panic.

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

use super::Square;

/// A move: a pass, or a step between two playable squares.
///
/// Move identity is purely positional; a move carries no color. Whether a
/// step is an extend or a jump follows from the distance between its
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Turn transfer without touching the grid; legal only when the mover
    /// has no step available.
    Pass,
    /// A transition from one square to another.
    Step { from: Square, to: Square },
}

impl Move {
    #[inline]
    pub fn step(from: Square, to: Square) -> Self {
        Move::Step { from, to }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    /// An extend targets an adjacent square (within one in each dimension)
    /// and clones the source piece rather than vacating it.
    #[inline]
    pub fn is_extend(self) -> bool {
        match self {
            Move::Pass => false,
            Move::Step { from, to } => {
                let (dc, dr) = deltas(from, to);
                dc <= 1 && dr <= 1 && (dc, dr) != (0, 0)
            }
        }
    }

    /// A jump targets a square exactly two away in at least one dimension
    /// (and at most two in both) and vacates the source.
    #[inline]
    pub fn is_jump(self) -> bool {
        match self {
            Move::Pass => false,
            Move::Step { from, to } => {
                let (dc, dr) = deltas(from, to);
                dc <= 2 && dr <= 2 && dc.max(dr) == 2
            }
        }
    }

    /// Source square, if this is a step.
    #[inline]
    pub fn from(self) -> Option<Square> {
        match self {
            Move::Pass => None,
            Move::Step { from, .. } => Some(from),
        }
    }

    /// Destination square, if this is a step.
    #[inline]
    pub fn to(self) -> Option<Square> {
        match self {
            Move::Pass => None,
            Move::Step { to, .. } => Some(to),
        }
    }
}

#[inline]
fn deltas(from: Square, to: Square) -> (i32, i32) {
    (
        (i32::from(to.col) - i32::from(from.col)).abs(),
        (i32::from(to.row) - i32::from(from.row)).abs(),
    )
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("-"),
            Move::Step { from, to } => write!(f, "{}-{}", from, to),
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Move::Pass);
        }
        let malformed = || GameError::MalformedMove { text: s.to_string() };
        let b = s.as_bytes();
        if b.len() != 5 || b[2] != b'-' {
            return Err(malformed());
        }
        let from = Square::from_chars(b[0] as char, b[1] as char).ok_or_else(malformed)?;
        let to = Square::from_chars(b[3] as char, b[4] as char).ok_or_else(malformed)?;
        Ok(Move::step(from, to))
    }
}
