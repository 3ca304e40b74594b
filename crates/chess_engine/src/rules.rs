//! The engine's view of the rules authority
//!
//! The search never decides what is legal. It asks a [`RulesAuthority`] for
//! the legal moves of the current position, plays them in place, and takes
//! them back again, so the authority must provide an exact inverse for every
//! move it enumerates.
//!
//! [`chess_logic::Position`] is the authority used by the game; tests plug in
//! small synthetic game trees through the same trait.

use crate::constants::figure_value;
use chess_logic::{ChessLogicError, Color, Move, Position};
use std::fmt;

pub trait RulesAuthority {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Legal moves for the side to move, in the authority's enumeration order
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play a move taken from [`RulesAuthority::legal_moves`]
    fn apply_move(&mut self, mv: Self::Move) -> Result<(), Self::Error>;

    /// Take back the most recent [`RulesAuthority::apply_move`]
    fn undo_move(&mut self) -> Result<(), Self::Error>;

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_stalemate() || self.is_insufficient_material()
    }

    fn turn(&self) -> Color;

    fn is_capture(&self, mv: Self::Move) -> bool;

    /// Ordering hint: larger means "try earlier". Zero for quiet moves.
    fn exchange_hint(&self, _mv: Self::Move) -> i32 {
        0
    }
}

impl RulesAuthority for Position {
    type Move = Move;
    type Error = ChessLogicError;

    fn legal_moves(&self) -> Vec<Move> {
        Position::legal_moves(self)
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), ChessLogicError> {
        self.play_unchecked(mv);
        Ok(())
    }

    fn undo_move(&mut self) -> Result<(), ChessLogicError> {
        self.undo().map(|_| ())
    }

    fn is_checkmate(&self) -> bool {
        Position::is_checkmate(self)
    }

    fn is_stalemate(&self) -> bool {
        Position::is_stalemate(self)
    }

    fn is_insufficient_material(&self) -> bool {
        Position::is_insufficient_material(self)
    }

    fn is_game_over(&self) -> bool {
        Position::is_game_over(self)
    }

    fn turn(&self) -> Color {
        Position::turn(self)
    }

    fn is_capture(&self, mv: Move) -> bool {
        Position::is_capture(self, mv)
    }

    /// MVV-LVA for captures plus the value of a promotion piece
    fn exchange_hint(&self, mv: Move) -> i32 {
        let capture = match (mv.captured(), self.piece_at(mv.from)) {
            // MVV-LVA: Most Valuable Victim - Least Valuable Attacker
            (Some(victim), Some(attacker)) => {
                figure_value(victim) * 10 - figure_value(attacker.role)
            }
            _ => 0,
        };
        capture + mv.promotion.map(figure_value).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_undo_through_trait() {
        let mut pos = Position::new();
        let mv = RulesAuthority::legal_moves(&pos)[0];

        pos.apply_move(mv).unwrap();
        assert_eq!(RulesAuthority::turn(&pos), Color::Black);
        pos.undo_move().unwrap();
        assert_eq!(pos, Position::new());

        assert_eq!(pos.undo_move(), Err(ChessLogicError::NothingToUndo));
    }

    #[test]
    fn test_exchange_hint_prefers_cheap_attacker() {
        // Pawn on e4 and queen on d1 can both take the d5 queen / d4 pawn
        let pos = Position::from_fen("4k3/8/8/3q4/3pP3/8/8/3QK3 w - - 0 1").unwrap();
        let moves = RulesAuthority::legal_moves(&pos);
        let hint = |uci: &str| {
            let mv = moves.iter().find(|m| m.to_string() == uci).copied().unwrap();
            pos.exchange_hint(mv)
        };

        assert!(hint("e4d5") > hint("d1d4"));
        assert!(hint("d1d4") > 0);
        assert_eq!(hint("e1f2"), 0);
    }
}
