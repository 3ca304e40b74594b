//! Move ordering for alpha-beta pruning
//!
//! Captures and promotions are tried first, best exchange first (MVV-LVA via
//! [`RulesAuthority::exchange_hint`]). Quiet moves follow in the authority's
//! enumeration order. The sort is stable, so equal keys keep enumeration
//! order and the result is reproducible.

use crate::rules::RulesAuthority;
use std::cmp::Reverse;

/// Order moves for better alpha-beta pruning
pub(crate) fn order_moves<R: RulesAuthority + ?Sized>(position: &R, moves: &mut [R::Move]) {
    moves.sort_by_key(|&mv| {
        let hint = position.exchange_hint(mv);
        let forcing = position.is_capture(mv) || hint > 0;
        Reverse((forcing, hint))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_logic::Position;

    fn ordered(fen: &str) -> Vec<String> {
        let pos = Position::from_fen(fen).unwrap();
        let mut moves = pos.legal_moves();
        order_moves(&pos, &mut moves);
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_order_moves_prioritizes_captures() {
        let moves = ordered("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(moves[0], "e4d5");
    }

    #[test]
    fn test_order_moves_mvv_lva() {
        // Pawn takes queen before queen takes pawn
        let moves = ordered("4k3/8/8/3q4/3pP3/8/8/3QK3 w - - 0 1");
        let pxq = moves.iter().position(|m| m == "e4d5").unwrap();
        let qxp = moves.iter().position(|m| m == "d1d4").unwrap();
        assert_eq!(pxq, 0);
        assert_eq!(qxp, 1);
    }

    #[test]
    fn test_quiet_moves_keep_enumeration_order() {
        let pos = Position::new();
        let mut moves = pos.legal_moves();
        let original = moves.clone();
        order_moves(&pos, &mut moves);
        assert_eq!(moves, original);
    }

    #[test]
    fn test_promotion_ordered_before_quiet() {
        let moves = ordered("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(moves[0], "a7a8q");
        assert!(moves[..4].iter().all(|m| m.starts_with("a7a8")));
    }
}
