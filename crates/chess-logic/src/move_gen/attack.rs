//! Attack detection and square checking
//!
//! Works backwards from the target square: instead of generating every
//! attacker move, look outward from the target along each attack pattern and
//! test whether the first piece met is one that attacks along that pattern.
//!
//! The functions take a bare [`Board`] so legality testing can run them on a
//! scratch copy of the mailbox without touching the live position.

use super::tables::{tables, DIAGONAL, ORTHOGONAL};
use crate::constants::*;
use crate::types::*;

/// Check if `square` is attacked by any piece of `by_color`
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    let t = tables();
    let sign = by_color.sign();
    let target = square.index();

    // A pawn of `by_color` attacks `square` from exactly the squares a pawn of
    // the other colour standing on `square` would attack.
    let pawn = PAWN_ID * sign;
    if t.pawn_attacks[by_color.other().index()][target]
        .iter()
        .any(|s| board[s.index()] == pawn)
    {
        return true;
    }

    let knight = KNIGHT_ID * sign;
    if t.knight[target].iter().any(|s| board[s.index()] == knight) {
        return true;
    }

    let king = KING_ID * sign;
    if t.king[target].iter().any(|s| board[s.index()] == king) {
        return true;
    }

    let rook = ROOK_ID * sign;
    let bishop = BISHOP_ID * sign;
    let queen = QUEEN_ID * sign;

    for dir in ORTHOGONAL {
        if let Some(piece) = first_piece_on_ray(board, &t.rays[target][dir]) {
            if piece == rook || piece == queen {
                return true;
            }
        }
    }

    for dir in DIAGONAL {
        if let Some(piece) = first_piece_on_ray(board, &t.rays[target][dir]) {
            if piece == bishop || piece == queen {
                return true;
            }
        }
    }

    false
}

fn first_piece_on_ray(board: &Board, ray: &[Square]) -> Option<i8> {
    ray.iter()
        .map(|s| board[s.index()])
        .find(|&piece| piece != VOID_ID)
}

/// Check if the king of `color` is attacked on `board`
///
/// A board without a king of that colour is reported as not in check.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    crate::board::find_king(board, color)
        .map(|king| is_square_attacked(board, king, color.other()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn empty_board() -> Board {
        [VOID_ID; 64]
    }

    #[test]
    fn test_pawn_attacks_diagonally_forward_only() {
        let mut board = empty_board();
        board[sq("e4").index()] = W_PAWN;

        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));
    }

    #[test]
    fn test_black_pawn_attacks_downward() {
        let mut board = empty_board();
        board[sq("e5").index()] = B_PAWN;

        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d6"), Color::Black));
    }

    #[test]
    fn test_slider_blocked_by_piece() {
        let mut board = empty_board();
        board[sq("a1").index()] = W_ROOK;
        board[sq("a4").index()] = B_PAWN;

        assert!(is_square_attacked(&board, sq("a3"), Color::White));
        assert!(is_square_attacked(&board, sq("a4"), Color::White));
        assert!(!is_square_attacked(&board, sq("a5"), Color::White));
        assert!(is_square_attacked(&board, sq("h1"), Color::White));
    }

    #[test]
    fn test_queen_attacks_diagonally() {
        let mut board = empty_board();
        board[sq("d1").index()] = B_QUEEN;

        assert!(is_square_attacked(&board, sq("h5"), Color::Black));
        assert!(!is_square_attacked(&board, sq("h4"), Color::Black));
    }

    #[test]
    fn test_knight_attack_does_not_wrap() {
        let mut board = empty_board();
        board[sq("h4").index()] = W_KNIGHT;

        assert!(is_square_attacked(&board, sq("g6"), Color::White));
        assert!(!is_square_attacked(&board, sq("a5"), Color::White));
    }

    #[test]
    fn test_king_attacked_detection() {
        let mut board = empty_board();
        board[sq("e1").index()] = W_KING;
        board[sq("e8").index()] = B_ROOK;

        assert!(is_king_attacked(&board, Color::White));
        board[sq("e2").index()] = W_PAWN;
        assert!(!is_king_attacked(&board, Color::White));
    }
}
