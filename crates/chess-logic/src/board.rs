//! Board utilities and helper functions
//!
//! Small queries over the raw mailbox used by move generation, attack
//! detection and make/unmake.

use crate::constants::*;
use crate::types::*;

/// Check if a mailbox entry belongs to `color`
#[inline]
pub fn piece_belongs_to(piece: i8, color: Color) -> bool {
    piece != VOID_ID && (piece > 0) == (color == Color::White)
}

/// Check if a mailbox entry belongs to the opponent of `color`
#[inline]
pub fn piece_is_enemy(piece: i8, color: Color) -> bool {
    piece != VOID_ID && !piece_belongs_to(piece, color)
}

#[inline]
pub fn get_piece_at(board: &Board, square: Square) -> i8 {
    board[square.index()]
}

#[inline]
pub fn is_empty(board: &Board, square: Square) -> bool {
    board[square.index()] == VOID_ID
}

/// Locate the king of `color`
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    let king = KING_ID * color.sign();
    board
        .iter()
        .position(|&piece| piece == king)
        .and_then(|index| Square::new(index as u8))
}

/// Initialize a board to the standard starting position
pub fn init_board() -> Board {
    SETUP
}
