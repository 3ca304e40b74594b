//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use super::Evaluate;
use crate::constants::figure_value;
use chess_logic::{Color, Position, Square};

/// Material balance only, no positional terms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialEvaluator;

/// Material balance from White's side
pub(crate) fn material_balance(position: &Position) -> i32 {
    Square::all()
        .filter_map(|sq| position.piece_at(sq))
        .map(|piece| match piece.color {
            Color::White => figure_value(piece.role),
            Color::Black => -figure_value(piece.role),
        })
        .sum()
}

impl Evaluate<Position> for MaterialEvaluator {
    fn static_score(&self, position: &Position, perspective: Color) -> i32 {
        material_balance(position) * i32::from(perspective.sign())
    }
}
