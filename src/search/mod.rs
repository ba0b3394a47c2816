//! Move search for the Ataxx engine
//!
//! Contains:
//! - Deterministic legal-move enumeration
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;

pub use alphabeta::{legal_moves, SearchResult, Searcher, MAX_DEPTH};
