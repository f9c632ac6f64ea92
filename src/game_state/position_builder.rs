//! Validated construction of arbitrary positions.
//!
//! Used by tests and by callers that start from something other than the
//! initial layout (puzzles, endgame drills). The builder enforces the
//! structural invariants `Position` relies on: one piece per square and
//! exactly one king per side.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy)]
struct Placement {
    kind: PieceKind,
    side: Side,
    square: Square,
    moved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PositionBuilder {
    placements: Vec<Placement>,
}

impl PositionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an unmoved piece.
    pub fn piece(mut self, side: Side, kind: PieceKind, square: Square) -> Self {
        self.placements.push(Placement {
            kind,
            side,
            square,
            moved: false,
        });
        self
    }

    /// Places a piece that counts as having moved already: no castling with
    /// it, no pawn double step.
    pub fn moved_piece(mut self, side: Side, kind: PieceKind, square: Square) -> Self {
        self.placements.push(Placement {
            kind,
            side,
            square,
            moved: true,
        });
        self
    }

    pub fn build(self) -> ChessResult<Position> {
        for side in Side::ALL {
            let kings = self
                .placements
                .iter()
                .filter(|p| p.side == side && p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessError::KingCount(side, kings));
            }
        }

        let mut position = Position::blank();
        for placement in &self.placements {
            if !position.is_empty(placement.square) {
                return Err(ChessError::SquareOccupied(placement.square));
            }
            let id = position.spawn(placement.kind, placement.side, placement.square);
            if placement.moved {
                position.piece_mut(id).has_moved = true;
            }
        }
        Ok(position)
    }
}
