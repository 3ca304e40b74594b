//! Perft: leaf-node counting over the legal move tree
//!
//! Used to check the move generator against published reference counts.
//! Walks the tree with play/undo on the given position, so the position is
//! restored when the count returns.

use crate::error::ChessLogicResult;
use crate::position::Position;

/// Count leaf nodes `depth` plies below `pos`
pub fn perft(pos: &mut Position, depth: u32) -> ChessLogicResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = pos.legal_moves();
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        pos.play_unchecked(mv);
        let child = perft(pos, depth - 1);
        pos.undo()?;
        nodes += child?;
    }
    Ok(nodes)
}

/// Per-root-move counts, as printed by `go perft` in UCI engines
pub fn perft_divide(pos: &mut Position, depth: u32) -> ChessLogicResult<Vec<(String, u64)>> {
    let mut counts = Vec::new();
    for mv in pos.legal_moves() {
        pos.play_unchecked(mv);
        let child = perft(pos, depth.saturating_sub(1));
        pos.undo()?;
        counts.push((mv.to_string(), child?));
    }
    Ok(counts)
}
