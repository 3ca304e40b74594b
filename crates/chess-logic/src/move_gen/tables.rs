//! Move table initialization
//!
//! Precomputes, for every square, the destinations a piece could reach on an
//! empty board: knight jumps, king steps, pawn attacks and the eight sliding
//! rays. Tables are built once on first use and shared by every position.
//!
//! Occupancy is applied later during generation: jump tables are filtered by
//! destination colour, and rays are walked outward until the first piece.

use crate::constants::*;
use crate::types::Square;
use std::sync::OnceLock;

/// Ray direction indices into [`MoveTables::rays`]; 0-3 orthogonal, 4-7 diagonal
pub(crate) const ORTHOGONAL: std::ops::Range<usize> = 0..4;
pub(crate) const DIAGONAL: std::ops::Range<usize> = 4..8;

pub(crate) struct MoveTables {
    pub knight: Vec<Vec<Square>>,
    pub king: Vec<Vec<Square>>,
    /// `pawn_attacks[color][square]`: squares a pawn of that colour attacks
    pub pawn_attacks: [Vec<Vec<Square>>; 2],
    /// `rays[square][direction]`: squares in order of distance
    pub rays: Vec<[Vec<Square>; 8]>,
}

static TABLES: OnceLock<MoveTables> = OnceLock::new();

pub(crate) fn tables() -> &'static MoveTables {
    TABLES.get_or_init(init_move_tables)
}

/// Initialize move tables for all piece types
fn init_move_tables() -> MoveTables {
    let squares: Vec<Square> = Square::all().collect();

    MoveTables {
        knight: squares.iter().map(|&sq| jumps_from(sq, &KNIGHT_DIRS)).collect(),
        king: squares.iter().map(|&sq| jumps_from(sq, &KING_DIRS)).collect(),
        pawn_attacks: [
            squares.iter().map(|&sq| jumps_from(sq, &[(-1, 1), (1, 1)])).collect(),
            squares.iter().map(|&sq| jumps_from(sq, &[(-1, -1), (1, -1)])).collect(),
        ],
        rays: squares.iter().map(|&sq| rays_from(sq)).collect(),
    }
}

fn jumps_from(from: Square, dirs: &[(i8, i8)]) -> Vec<Square> {
    dirs.iter().filter_map(|&dir| from.offset(dir)).collect()
}

fn rays_from(from: Square) -> [Vec<Square>; 8] {
    let all_dirs: Vec<(i8, i8)> = ROOK_DIRS.iter().chain(BISHOP_DIRS.iter()).copied().collect();

    std::array::from_fn(|i| {
        let mut ray = Vec::new();
        let mut current = from;
        while let Some(next) = current.offset(all_dirs[i]) {
            ray.push(next);
            current = next;
        }
        ray
    })
}
