//! Full position evaluation
//!
//! Evaluates positions using material and piece-square tables.

use super::material::material_balance;
use super::pst::pst_value;
use super::Evaluate;
use chess_logic::{Color, Position, Square};

/// Material plus piece-square bonuses; the engine's default evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceSquareEvaluator;

/// Positional balance from White's side
fn positional_balance(position: &Position) -> i32 {
    Square::all()
        .filter_map(|sq| position.piece_at(sq).map(|piece| (sq, piece)))
        .map(|(sq, piece)| match piece.color {
            Color::White => pst_value(piece, sq),
            Color::Black => -pst_value(piece, sq),
        })
        .sum()
}

impl Evaluate<Position> for PieceSquareEvaluator {
    fn static_score(&self, position: &Position, perspective: Color) -> i32 {
        let white = material_balance(position) + positional_balance(position);
        white * i32::from(perspective.sign())
    }
}
