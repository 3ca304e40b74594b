//! # Search Engine Constants - Evaluation Values & Search Bounds
//!
//! ## Centipawn Valuation System
//!
//! Scores are integers in **centipawns** (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 300
//! - **Bishop**: 300
//! - **Rook**: 500
//! - **Queen**: 900
//!
//! The king carries no material value; losing it is expressed through the
//! mate score instead.
//!
//! ## Terminal Scores
//!
//! A checkmate scores `MATE_SCORE - ply` for the winner, where `ply` is the
//! distance from the search root. Nearer mates therefore score higher, and a
//! side that is getting mated prefers the longest defence. `MATE_SCORE` is far
//! above any reachable material sum (at most ~10,000 with every promotion
//! taken), so a forced mate always outranks winning material. Scores with an
//! absolute value above `MATE_THRESHOLD` are mate scores.
//!
//! Stalemate and insufficient material score `DRAW_SCORE` regardless of the
//! material on the board.

use chess_logic::Role;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 0;

pub const MATE_SCORE: i32 = 100_000;
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_DEPTH as i32;
pub const DRAW_SCORE: i32 = 0;

/// Alpha-beta window bound, strictly outside every reachable score
pub const AB_INF: i32 = MATE_SCORE + 1;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Deepest search a configuration may request
pub const MAX_DEPTH: u32 = 64;

/// Material value of a role in centipawns
#[inline]
pub fn figure_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}
