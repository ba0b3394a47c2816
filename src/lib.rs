//! Ataxx game engine
//!
//! An engine for the board game Ataxx, played on a 7x7 grid:
//! - An "extend" clones a piece onto an adjacent empty square
//! - A "jump" relocates a piece two squares away, vacating the source
//! - Every opposing piece adjacent to the destination flips to the mover
//! - The game ends when a side has no pieces, neither side can move, or
//!   25 consecutive jumps pass without an intervening extend; whoever
//!   holds more pieces wins (a tie is possible)
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: padded-grid board state machine with reversible moves
//! - [`eval`]: static position evaluation
//! - [`search`]: depth-limited minimax with alpha-beta pruning
//! - [`engine`]: main AI engine integrating the search
//! - [`error`]: errors for illegal operations and malformed move text
//!
//! # Quick Start
//!
//! ```
//! use ataxx::{Board, Engine, PieceColor};
//!
//! let mut board = Board::new();
//! // Smaller depth for a fast doc test
//! let mut engine = Engine::with_depth(3);
//!
//! let mv = engine.find_move(&board, PieceColor::Red);
//! board.make_move(mv).unwrap();
//! println!("red plays {}", mv);
//! ```
//!
//! # Board geometry
//!
//! The 7x7 playing area sits inside an 11x11 backing store whose outer two
//! rows and columns are permanently blocked. Neighbor and jump offsets from
//! any playable square land inside the store, so move legality never tests
//! bounds: border cells simply read as blocked and are rejected like any
//! other blocked square.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameOutcome, Move, PieceColor, Square, JUMP_LIMIT, SIDE};
pub use engine::Engine;
pub use error::{GameError, GameResult};
pub use search::{SearchResult, Searcher};
