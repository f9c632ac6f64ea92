//! Terminal-oriented Unicode board renderer.
//!
//! Draws a position with rank 8 at the top, for the CLI, logs and test
//! failure messages. Optional hint squares (legal destinations of a selected
//! piece) are drawn as `•` when empty and bracketed when occupied.

use crate::game_state::chess_types::{Piece, PieceKind, Position, Side, Square};

const FILE_LABELS: &str = "  a  b  c  d  e  f  g  h";

/// Render the board to a Unicode string for terminal output.
pub fn render_position(position: &Position) -> String {
    render_with_hints(position, &[])
}

pub fn render_with_hints(position: &Position, hints: &[Square]) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        for file in 0..8u8 {
            let square = Square::at(rank, file);
            let hinted = hints.contains(&square);
            match (position.occupant(square), hinted) {
                (Some(piece), true) => {
                    out.push('[');
                    out.push(piece_glyph(piece));
                    out.push(']');
                }
                (Some(piece), false) => {
                    out.push(' ');
                    out.push(piece_glyph(piece));
                    out.push(' ');
                }
                (None, true) => out.push_str(" • "),
                (None, false) => out.push_str(" · "),
            }
        }
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

pub fn piece_glyph(piece: &Piece) -> char {
    piece_to_unicode(piece.side(), piece.kind())
}

fn piece_to_unicode(side: Side, kind: PieceKind) -> char {
    match (side, kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}
