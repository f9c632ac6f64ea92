use crate::game_state::chess_types::{Piece, Position, Side, Square};

pub const WHITE_PAWN_VECTORS: [(i8, i8); 4] = [(1, 0), (2, 0), (1, 1), (1, -1)];
pub const BLACK_PAWN_VECTORS: [(i8, i8); 4] = [(-1, 0), (-2, 0), (-1, 1), (-1, -1)];

#[inline]
pub const fn pawn_vectors(side: Side) -> &'static [(i8, i8); 4] {
    match side {
        Side::White => &WHITE_PAWN_VECTORS,
        Side::Black => &BLACK_PAWN_VECTORS,
    }
}

/// Forward steps need empty squares (both of them for the double step, which
/// is only open to an unmoved pawn). Diagonal steps need an opposing piece on
/// the target. There is no en-passant.
pub fn pawn_destinations(position: &Position, pawn: &Piece, out: &mut Vec<Square>) {
    let origin = pawn.square();
    for &(d_rank, d_file) in pawn_vectors(pawn.side()) {
        let Some(target) = origin.offset(d_rank, d_file) else {
            continue;
        };

        if d_file != 0 {
            if matches!(position.occupant(target), Some(other) if other.side() != pawn.side()) {
                out.push(target);
            }
            continue;
        }

        match d_rank.abs() {
            1 => {
                if position.is_empty(target) {
                    out.push(target);
                }
            }
            _ => {
                let intermediate = origin.offset(d_rank / 2, 0);
                let path_clear = intermediate.is_some_and(|sq| position.is_empty(sq));
                if !pawn.has_moved() && path_clear && position.is_empty(target) {
                    out.push(target);
                }
            }
        }
    }
}
