//! Piece-square tables
//!
//! Values are in centipawns from White's side, indexed a1 = 0 through h8 = 63
//! (first row below is rank 1). Black pieces read the table mirrored across
//! the middle of the board.

use chess_logic::{Color, Piece, Role, Square};

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  5,  5,  5,  5,  5,  0,-10,
     0,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST_MIDDLEGAME: [i32; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

/// Positional bonus of `piece` on `square`, from its owner's side
pub(crate) fn pst_value(piece: Piece, square: Square) -> i32 {
    // Flip the rank for black pieces; files stay put
    let index = match piece.color {
        Color::White => square.index(),
        Color::Black => square.index() ^ 56,
    };

    match piece.role {
        Role::Pawn => PAWN_PST[index],
        Role::Knight => KNIGHT_PST[index],
        Role::Bishop => BISHOP_PST[index],
        Role::Rook => ROOK_PST[index],
        Role::Queen => QUEEN_PST[index],
        Role::King => KING_PST_MIDDLEGAME[index],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_tables_mirror_between_colors() {
        let white_knight = Piece::new(Color::White, Role::Knight);
        let black_knight = Piece::new(Color::Black, Role::Knight);
        assert_eq!(pst_value(white_knight, sq("f3")), pst_value(black_knight, sq("f6")));

        let white_king = Piece::new(Color::White, Role::King);
        let black_king = Piece::new(Color::Black, Role::King);
        assert_eq!(pst_value(white_king, sq("g1")), pst_value(black_king, sq("g8")));
    }

    #[test]
    fn test_center_pawns_rewarded_for_advancing() {
        let pawn = Piece::new(Color::White, Role::Pawn);
        assert!(pst_value(pawn, sq("e4")) > pst_value(pawn, sq("e2")));
        assert!(pst_value(pawn, sq("a7")) > pst_value(pawn, sq("a4")));
    }

    #[test]
    fn test_knight_prefers_center() {
        let knight = Piece::new(Color::Black, Role::Knight);
        assert!(pst_value(knight, sq("d5")) > pst_value(knight, sq("a8")));
    }
}
