//! King stepping moves and castling candidates.
//!
//! Castling availability is checked against the opponent's pseudo-legal reach
//! (`attack_map`), never with full legal-move filtering, so the check cannot
//! recurse back into king move generation.

use crate::game_state::chess_rules::{king_home_square, CastleSide};
use crate::game_state::chess_types::{Piece, PieceKind, Position, Square};
use crate::move_generation::legal_move_checks::attack_map;

pub const KING_VECTORS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Appends the king's castling destinations.
///
/// A wing is available when the king is unmoved on its home square and not in
/// check, the wing's rook is unmoved on its corner, every square between them
/// is empty, and none of the squares the king crosses or lands on is reached
/// by the opponent.
pub fn castling_destinations(position: &Position, king: &Piece, out: &mut Vec<Square>) {
    if king.has_moved() || king.square() != king_home_square(king.side()) {
        return;
    }

    let rank = king.side().back_rank();
    let shaped: Vec<CastleSide> = CastleSide::ALL
        .into_iter()
        .filter(|wing| {
            let rook_ready = matches!(
                position.occupant(wing.rook_corner(rank)),
                Some(rook) if rook.kind() == PieceKind::Rook
                    && rook.side() == king.side()
                    && !rook.has_moved()
            );
            rook_ready
                && wing
                    .empty_files()
                    .iter()
                    .all(|file| position.is_empty(Square::at(rank, *file)))
        })
        .collect();
    if shaped.is_empty() {
        return;
    }

    let attacked = attack_map(position, king.side().opposite());
    if attacked.contains(king.square()) {
        return;
    }
    for wing in shaped {
        let safe = wing
            .safe_files()
            .iter()
            .all(|file| !attacked.contains(Square::at(rank, *file)));
        if safe {
            out.push(Square::at(rank, wing.king_target_file()));
        }
    }
}
