use crate::game_state::chess_types::{Piece, Position, Square};

pub const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Walks one ray outward. Empty squares are destinations and the walk goes
/// on; the first occupied square ends the ray and counts only if it holds an
/// opposing piece.
pub fn trace_ray(position: &Position, piece: &Piece, d_rank: i8, d_file: i8, out: &mut Vec<Square>) {
    let mut cursor = piece.square();
    while let Some(target) = cursor.offset(d_rank, d_file) {
        match position.occupant(target) {
            None => out.push(target),
            Some(blocker) => {
                if blocker.side() != piece.side() {
                    out.push(target);
                }
                break;
            }
        }
        cursor = target;
    }
}
