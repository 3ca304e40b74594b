//! Depth-limited alpha-beta search
//!
//! This module implements the core search using:
//! - Negamax variant of alpha-beta pruning (fail-soft)
//! - Move ordering for better pruning
//! - Mutate/undo on the caller's position; nothing is copied per node
//!
//! ## Module Organization
//!
//! - `alphabeta` - Root move selection and the recursive negamax
//! - `ordering` - Move ordering heuristics

mod alphabeta;
mod ordering;

pub(crate) use alphabeta::Searcher;

use serde::{Deserialize, Serialize};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Beta cutoffs taken
    pub cutoffs: u64,
    /// Deepest ply reached below the root
    pub max_depth: u32,
}

/// Result of a completed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// Best root move, `None` when the position is already finished
    pub best_move: Option<M>,
    /// Score of the best move for the engine's side
    pub score: i32,
    pub stats: SearchStats,
}
