//! Static evaluation
//!
//! Scores a position without searching it:
//! - Terminal positions first: checkmate is a (ply-biased) maximal loss for the
//!   side to move, stalemate and insufficient material are draws
//! - Otherwise material, optionally refined by piece-square tables
//!
//! Every evaluator is a pure function of the position; none of them mutate it.
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance evaluation
//! - `position` - Full position evaluation (material + positional)

mod material;
mod position;
mod pst;

pub use material::MaterialEvaluator;
pub use position::PieceSquareEvaluator;

use crate::constants::{DRAW_SCORE, MATE_SCORE};
use crate::rules::RulesAuthority;
use chess_logic::Color;

/// A static evaluation function over positions of authority `R`
pub trait Evaluate<R: RulesAuthority + ?Sized> {
    /// Score of a non-terminal position for `perspective`, in centipawns
    fn static_score(&self, position: &R, perspective: Color) -> i32;

    /// Score for `perspective`, `ply` half-moves below the search root
    fn evaluate(&self, position: &R, perspective: Color, ply: u32) -> i32 {
        terminal_score(position, perspective, ply)
            .unwrap_or_else(|| self.static_score(position, perspective))
    }
}

/// Score of a finished game, or `None` while play can continue
pub fn terminal_score<R: RulesAuthority + ?Sized>(
    position: &R,
    perspective: Color,
    ply: u32,
) -> Option<i32> {
    if position.is_checkmate() {
        let loss = -(MATE_SCORE - ply as i32);
        return Some(if position.turn() == perspective {
            loss
        } else {
            -loss
        });
    }
    if position.is_stalemate() || position.is_insufficient_material() {
        return Some(DRAW_SCORE);
    }
    None
}
