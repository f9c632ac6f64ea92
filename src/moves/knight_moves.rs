use crate::game_state::chess_types::{Piece, Position, Square};

pub const KNIGHT_VECTORS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Single-step generator shared by knights and kings: a target is valid when
/// it is on the board and not held by a piece of the mover's side.
pub fn step_targets(position: &Position, piece: &Piece, vectors: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_rank, d_file) in vectors {
        let Some(target) = piece.square().offset(d_rank, d_file) else {
            continue;
        };
        match position.occupant(target) {
            Some(other) if other.side() == piece.side() => {}
            _ => out.push(target),
        }
    }
}
