//! Text rendering of the board and move hints

use chess_logic::{Color, Move, Piece, Position, Square};

/// Board diagram seen from `perspective`, with rank/file labels
///
/// The last move's squares are bracketed and a line naming the checked king
/// follows the diagram when the side to move is in check.
pub fn render_board(position: &Position, perspective: Color) -> String {
    let (ranks, files): (Vec<i8>, Vec<i8>) = match perspective {
        Color::White => ((0..8).rev().collect(), (0..8).collect()),
        Color::Black => ((0..8).collect(), (0..8).rev().collect()),
    };
    let last = position.last_move();
    let marked = |sq: Square| last.is_some_and(|mv| mv.from == sq || mv.to == sq);

    let mut out = String::new();
    for &rank in &ranks {
        out.push_str(&format!("{} ", rank + 1));
        for &file in &files {
            let Some(sq) = Square::from_coords(file, rank) else {
                continue;
            };
            let symbol = position.piece_at(sq).map(Piece::symbol).unwrap_or('.');
            if marked(sq) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &files {
        out.push_str(&format!(" {} ", (b'a' + file as u8) as char));
    }
    out.push('\n');

    if let Some(line) = check_line(position) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// `Check! White king on e1` when the side to move is in check
pub fn check_line(position: &Position) -> Option<String> {
    if !position.is_check() {
        return None;
    }
    let color = position.turn();
    let king = position.king_square(color)?;
    let name = match color {
        Color::White => "White",
        Color::Black => "Black",
    };
    Some(format!("Check! {} king on {}", name, king))
}

/// Destinations of `moves`, captures prefixed with `x`
pub fn render_targets(from: Square, moves: &[Move]) -> String {
    if moves.is_empty() {
        return format!("No legal moves from {}", from);
    }
    let mut targets: Vec<String> = Vec::with_capacity(moves.len());
    for mv in moves {
        let target = if mv.is_capture() {
            format!("x{}", mv.to)
        } else {
            mv.to.to_string()
        };
        // promotions share a destination; list it once
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    format!("Moves from {}: {}", from, targets.join(" "))
}
