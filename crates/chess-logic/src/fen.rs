//! FEN import and export
//!
//! All six fields are required on input. Besides syntax, a parsed position
//! must have exactly one king per side, no pawns on the first or last rank,
//! and the side not to move must not be in check.

use crate::constants::*;
use crate::error::{ChessLogicError, ChessLogicResult};
use crate::move_gen::attack::is_king_attacked;
use crate::position::Position;
use crate::types::*;

impl Position {
    pub fn from_fen(fen: &str) -> ChessLogicResult<Self> {
        let fail = |reason: &str| ChessLogicError::InvalidFen {
            fen: fen.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(fail("expected 6 space-separated fields"));
        }

        let board = parse_placement(fields[0]).map_err(|reason| fail(&reason))?;

        let turn = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(fail("side to move must be 'w' or 'b'")),
        };

        let castling = parse_castling(fields[2]).ok_or_else(|| fail("bad castling field"))?;

        let ep_square = match fields[3] {
            "-" => None,
            text => {
                let square: Square = text.parse().map_err(|_| fail("bad en-passant square"))?;
                let expected_rank = match turn {
                    Color::White => 5,
                    Color::Black => 2,
                };
                if square.rank() != expected_rank {
                    return Err(fail("en-passant square on the wrong rank"));
                }
                en_passant_target(&board, square, turn)
            }
        };

        let halfmove_clock: u32 = fields[4].parse().map_err(|_| fail("bad halfmove clock"))?;
        let fullmove_number: u32 = fields[5].parse().map_err(|_| fail("bad fullmove number"))?;
        if fullmove_number == 0 {
            return Err(fail("fullmove number starts at 1"));
        }

        for color in [Color::White, Color::Black] {
            let king = KING_ID * color.sign();
            if board.iter().filter(|&&piece| piece == king).count() != 1 {
                return Err(fail("each side needs exactly one king"));
            }
        }
        if is_king_attacked(&board, turn.other()) {
            return Err(fail("side not to move is in check"));
        }

        Ok(Position {
            board,
            turn,
            castling: castling & rights_on_board(&board),
            ep_square,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        })
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let piece = Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let turn = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (bit, symbol) in [
            (WHITE_KINGSIDE, 'K'),
            (WHITE_QUEENSIDE, 'Q'),
            (BLACK_KINGSIDE, 'k'),
            (BLACK_QUEENSIDE, 'q'),
        ] {
            if self.castling & bit != 0 {
                castling.push(symbol);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .ep_square
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{} {} {} {} {} {}",
            placement, turn, castling, ep, self.halfmove_clock, self.fullmove_number
        )
    }
}

fn parse_placement(field: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err("placement needs 8 ranks".to_string());
    }

    let mut board = [VOID_ID; 64];
    for (i, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - i as i8;
        let mut file: i8 = 0;

        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(format!("bad empty-square count '{}'", c));
                }
                file += skip as i8;
                continue;
            }

            let piece = Piece::from_symbol(c).ok_or_else(|| format!("unknown piece '{}'", c))?;
            if piece.role == Role::Pawn && (rank == 0 || rank == 7) {
                return Err("pawn on first or last rank".to_string());
            }
            let square = Square::from_coords(file, rank)
                .ok_or_else(|| format!("rank {} overflows", rank + 1))?;
            board[square.index()] = piece.encode();
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank {} does not have 8 files", rank + 1));
        }
    }

    Ok(board)
}

/// Keep an en-passant square only when a double push could have produced it
///
/// The pushed enemy pawn must stand just past the square, and the square and
/// the pawn's origin must both be empty. Anything else is dropped.
fn en_passant_target(board: &Board, square: Square, turn: Color) -> Option<Square> {
    let forward = turn.forward();
    let pushed = square.offset((0, -forward))?;
    let origin = square.offset((0, forward))?;
    let enemy_pawn = PAWN_ID * turn.other().sign();

    (board[pushed.index()] == enemy_pawn
        && board[square.index()] == VOID_ID
        && board[origin.index()] == VOID_ID)
        .then_some(square)
}

fn parse_castling(field: &str) -> Option<u8> {
    if field == "-" {
        return Some(0);
    }
    field.chars().try_fold(0u8, |rights, c| {
        let bit = match c {
            'K' => WHITE_KINGSIDE,
            'Q' => WHITE_QUEENSIDE,
            'k' => BLACK_KINGSIDE,
            'q' => BLACK_QUEENSIDE,
            _ => return None,
        };
        Some(rights | bit)
    })
}

/// Castling rights whose king and rook still stand on their home squares
fn rights_on_board(board: &Board) -> u8 {
    let mut rights = 0;
    if board[WK4] == W_KING {
        if board[WR7] == W_ROOK {
            rights |= WHITE_KINGSIDE;
        }
        if board[WR0] == W_ROOK {
            rights |= WHITE_QUEENSIDE;
        }
    }
    if board[BK60] == B_KING {
        if board[BR63] == B_ROOK {
            rights |= BLACK_KINGSIDE;
        }
        if board[BR56] == B_ROOK {
            rights |= BLACK_QUEENSIDE;
        }
    }
    rights
}
