//! Move generation with precalculated move tables
//!
//! Generation runs in two stages:
//!
//! 1. **Pseudo-legal**: every move the pieces of the side to move can make,
//!    ignoring whether it leaves their own king attacked. Castling is the
//!    exception: its "not through check" conditions are tested here because
//!    they concern squares other than the king's destination.
//! 2. **Legal**: each pseudo-legal move is played on a scratch copy of the
//!    mailbox and kept only if the mover's king is not attacked afterwards.
//!
//! Moves are emitted square by square from a1 to h8, so enumeration order is
//! stable for a given position.
//!
//! ## Module Organization
//!
//! - `tables` - Precomputed jump tables and sliding rays
//! - `attack` - Square attack detection

pub mod attack;
pub(crate) mod tables;

use crate::board::*;
use crate::constants::*;
use crate::make_unmake::apply_to_board;
use crate::position::Position;
use crate::types::*;
use attack::{is_king_attacked, is_square_attacked};
use tables::{tables, DIAGONAL, ORTHOGONAL};

/// Generate all pseudo-legal moves for the side to move
pub(crate) fn generate_pseudo_legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let color = pos.turn;

    for square in Square::all() {
        let piece = pos.board[square.index()];
        if !piece_belongs_to(piece, color) {
            continue;
        }

        match piece.abs() {
            PAWN_ID => generate_pawn_moves(pos, square, color, &mut moves),
            KNIGHT_ID => generate_jump_moves(pos, square, color, &tables().knight[square.index()], &mut moves),
            BISHOP_ID => generate_sliding_moves(pos, square, color, DIAGONAL, &mut moves),
            ROOK_ID => generate_sliding_moves(pos, square, color, ORTHOGONAL, &mut moves),
            QUEEN_ID => generate_sliding_moves(pos, square, color, 0..8, &mut moves),
            KING_ID => {
                generate_jump_moves(pos, square, color, &tables().king[square.index()], &mut moves);
                generate_castling_moves(pos, square, color, &mut moves);
            }
            _ => {}
        }
    }

    moves
}

/// Generate all legal moves for the side to move
pub(crate) fn generate_legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = generate_pseudo_legal_moves(pos);
    moves.retain(|&mv| is_legal(pos, mv));
    moves
}

/// Check that a pseudo-legal move does not leave the mover's king attacked
pub(crate) fn is_legal(pos: &Position, mv: Move) -> bool {
    let mut scratch = pos.board;
    apply_to_board(&mut scratch, mv, pos.turn);
    !is_king_attacked(&scratch, pos.turn)
}

fn capture_kind(target: i8) -> MoveKind {
    match Role::from_id(target.abs()) {
        Some(role) => MoveKind::Capture(role),
        None => MoveKind::Quiet,
    }
}

fn push_pawn_move(moves: &mut Vec<Move>, mv: Move, promotes: bool) {
    if promotes {
        moves.extend(Role::PROMOTIONS.iter().map(|&role| mv.with_promotion(role)));
    } else {
        moves.push(mv);
    }
}

fn generate_pawn_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();
    let (start_rank, last_rank) = match color {
        Color::White => (1, 7),
        Color::Black => (6, 0),
    };

    // Pushes
    if let Some(one) = from.offset((0, forward)) {
        if is_empty(&pos.board, one) {
            push_pawn_move(
                moves,
                Move::new(from, one, MoveKind::Quiet),
                one.rank() == last_rank,
            );

            if from.rank() == start_rank {
                if let Some(two) = one.offset((0, forward)) {
                    if is_empty(&pos.board, two) {
                        moves.push(Move::new(from, two, MoveKind::DoublePush));
                    }
                }
            }
        }
    }

    // Captures, including en passant
    for &to in &tables().pawn_attacks[color.index()][from.index()] {
        let target = pos.board[to.index()];
        if piece_is_enemy(target, color) {
            push_pawn_move(
                moves,
                Move::new(from, to, capture_kind(target)),
                to.rank() == last_rank,
            );
        } else if pos.ep_square == Some(to) {
            moves.push(Move::new(from, to, MoveKind::EnPassant));
        }
    }
}

fn generate_jump_moves(
    pos: &Position,
    from: Square,
    color: Color,
    targets: &[Square],
    moves: &mut Vec<Move>,
) {
    for &to in targets {
        let target = pos.board[to.index()];
        if target == VOID_ID {
            moves.push(Move::new(from, to, MoveKind::Quiet));
        } else if piece_is_enemy(target, color) {
            moves.push(Move::new(from, to, capture_kind(target)));
        }
    }
}

fn generate_sliding_moves(
    pos: &Position,
    from: Square,
    color: Color,
    dirs: std::ops::Range<usize>,
    moves: &mut Vec<Move>,
) {
    let rays = &tables().rays[from.index()];

    for dir in dirs {
        for &to in &rays[dir] {
            let target = pos.board[to.index()];
            if target == VOID_ID {
                moves.push(Move::new(from, to, MoveKind::Quiet));
                continue;
            }
            if piece_is_enemy(target, color) {
                moves.push(Move::new(from, to, capture_kind(target)));
            }
            break;
        }
    }
}

/// Castling squares for one colour and side
pub(crate) struct CastlePath {
    pub right: u8,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty
    pub empty: &'static [Square],
    /// Squares the king crosses (excluding its start) that must not be attacked
    pub safe: &'static [Square],
}

pub(crate) fn castle_path(color: Color, side: CastleSide) -> CastlePath {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => CastlePath {
            right: WHITE_KINGSIDE,
            king_from: Square::E1,
            king_to: Square::G1,
            rook_from: Square::H1,
            rook_to: Square::F1,
            empty: &[Square::F1, Square::G1],
            safe: &[Square::F1, Square::G1],
        },
        (Color::White, CastleSide::QueenSide) => CastlePath {
            right: WHITE_QUEENSIDE,
            king_from: Square::E1,
            king_to: Square::C1,
            rook_from: Square::A1,
            rook_to: Square::D1,
            empty: &[Square::D1, Square::C1, Square::B1],
            safe: &[Square::D1, Square::C1],
        },
        (Color::Black, CastleSide::KingSide) => CastlePath {
            right: BLACK_KINGSIDE,
            king_from: Square::E8,
            king_to: Square::G8,
            rook_from: Square::H8,
            rook_to: Square::F8,
            empty: &[Square::F8, Square::G8],
            safe: &[Square::F8, Square::G8],
        },
        (Color::Black, CastleSide::QueenSide) => CastlePath {
            right: BLACK_QUEENSIDE,
            king_from: Square::E8,
            king_to: Square::C8,
            rook_from: Square::A8,
            rook_to: Square::D8,
            empty: &[Square::D8, Square::C8, Square::B8],
            safe: &[Square::D8, Square::C8],
        },
    }
}

fn generate_castling_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        let path = castle_path(color, side);

        if pos.castling & path.right == 0 || from != path.king_from {
            continue;
        }
        if pos.board[path.rook_from.index()] != ROOK_ID * color.sign() {
            continue;
        }
        if !path.empty.iter().all(|&s| is_empty(&pos.board, s)) {
            continue;
        }

        let them = color.other();
        if is_square_attacked(&pos.board, from, them)
            || path.safe.iter().any(|&s| is_square_attacked(&pos.board, s, them))
        {
            continue;
        }

        moves.push(Move::new(from, path.king_to, MoveKind::Castle(side)));
    }
}
