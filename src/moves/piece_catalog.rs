//! Piece Catalog: the movement rule of every piece kind.
//!
//! Each kind carries a fixed table of relative vectors and a `slides` flag.
//! `reach_into` dispatches on the kind to the stepping, sliding or pawn
//! generator and is what attack detection uses. `pseudo_legal_into` is the
//! same plus castling candidates for kings. Both are pure reads of the grid.

use crate::game_state::chess_types::{PieceId, PieceKind, Position, Side, Square};
use crate::moves::bishop_moves::BISHOP_RAYS;
use crate::moves::king_moves::{castling_destinations, KING_VECTORS};
use crate::moves::knight_moves::{step_targets, KNIGHT_VECTORS};
use crate::moves::pawn_moves::{pawn_destinations, pawn_vectors};
use crate::moves::queen_moves::QUEEN_RAYS;
use crate::moves::rook_moves::{trace_ray, ROOK_RAYS};

impl PieceKind {
    /// Step vectors for King/Knight/Pawn, ray directions for sliders.
    /// Vectors are `(d_rank, d_file)`.
    pub const fn move_vectors(self, side: Side) -> &'static [(i8, i8)] {
        match self {
            PieceKind::King => &KING_VECTORS,
            PieceKind::Queen => &QUEEN_RAYS,
            PieceKind::Rook => &ROOK_RAYS,
            PieceKind::Bishop => &BISHOP_RAYS,
            PieceKind::Knight => &KNIGHT_VECTORS,
            PieceKind::Pawn => pawn_vectors(side),
        }
    }

    /// Rook, Bishop and Queen walk their rays until blocked.
    #[inline]
    pub const fn slides(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop)
    }
}

/// Squares the piece reaches by its movement shape, without castling. A square
/// in this set counts as attacked by the piece's side.
pub fn reach_into(position: &Position, id: PieceId, out: &mut Vec<Square>) {
    let piece = position.piece(id);
    let kind = piece.kind();
    let vectors = kind.move_vectors(piece.side());
    match kind {
        PieceKind::Pawn => pawn_destinations(position, piece, out),
        _ if kind.slides() => {
            for &(d_rank, d_file) in vectors {
                trace_ray(position, piece, d_rank, d_file, out);
            }
        }
        _ => step_targets(position, piece, vectors, out),
    }
}

/// Shape-legal destinations, castling included.
pub fn pseudo_legal_into(position: &Position, id: PieceId, out: &mut Vec<Square>) {
    reach_into(position, id, out);
    let piece = position.piece(id);
    if piece.kind() == PieceKind::King {
        castling_destinations(position, piece, out);
    }
}

pub fn pseudo_legal_destinations(position: &Position, id: PieceId) -> Vec<Square> {
    let mut out = Vec::new();
    pseudo_legal_into(position, id, &mut out);
    out
}
