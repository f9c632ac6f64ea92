//! Reversible move application.
//!
//! `make_move` and `unmake_move` are exact inverses for every state reachable
//! through `make_move`: grid, rosters (including their order), king handles,
//! moved/castled flags and both history stacks. Search and legality filtering
//! depend on this.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::CastleSide;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{CapturedPiece, HistoryEntry};

impl Position {
    /// Plays `mv`, which the caller has drawn from `legal_moves`.
    ///
    /// Captures the occupant of the destination, carries the rook along on a
    /// two-file king move, and records the mover's first move. Promotion is
    /// left to the caller (`promote_pawn`).
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        let id = self.occupant_id(mv.from).ok_or(ChessError::EmptySquare(mv.from))?;
        let kind = self.piece(id).kind;
        let side = self.piece(id).side;

        let castle = match kind {
            PieceKind::King => CastleSide::from_file_shift(mv.file_shift()),
            _ => None,
        };
        let castle_rook = match castle {
            Some(wing) => Some((wing, self.castling_rook(side, wing, mv.from.rank())?)),
            None => None,
        };

        let capture = match self.occupant_id(mv.to) {
            Some(victim) => {
                let roster_index = self.lift(victim)?;
                self.captured.push(CapturedPiece {
                    id: victim,
                    roster_index,
                });
                true
            }
            None => false,
        };

        self.relocate(id, mv.to);

        if let Some((wing, rook)) = castle_rook {
            let landing = wing.rook_landing(mv.from.rank());
            self.relocate(rook, landing);
            let rook_piece = self.piece_mut(rook);
            rook_piece.has_moved = true;
            rook_piece.first_move = Some(landing);
            self.piece_mut(id).has_castled = true;
        }

        let piece = self.piece_mut(id);
        let first_move = kind.tracks_first_move() && !piece.has_moved;
        if first_move {
            piece.has_moved = true;
            piece.first_move = Some(mv.to);
        }

        self.history.push(HistoryEntry {
            from: mv.from,
            to: mv.to,
            capture,
            first_move,
        });
        Ok(())
    }

    /// Reverts the last `make_move`.
    pub fn unmake_move(&mut self) -> ChessResult<()> {
        let entry = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        let id = self.occupant_id(entry.to).ok_or(ChessError::EmptySquare(entry.to))?;
        self.relocate(id, entry.from);

        let (kind, side) = (self.piece(id).kind, self.piece(id).side);
        if entry.first_move {
            let piece = self.piece_mut(id);
            debug_assert_eq!(piece.first_move, Some(entry.to));
            piece.has_moved = false;
            piece.first_move = None;
        }

        if kind == PieceKind::King {
            let shift = Move::new(entry.from, entry.to).file_shift();
            if let Some(wing) = CastleSide::from_file_shift(shift) {
                let rank = entry.from.rank();
                let landing = wing.rook_landing(rank);
                let rook = match self.occupant(landing) {
                    Some(piece) if piece.kind == PieceKind::Rook && piece.side == side => {
                        self.occupant_id(landing)
                    }
                    _ => None,
                }
                .ok_or(ChessError::CorruptedCastle(landing))?;
                self.relocate(rook, wing.rook_corner(rank));
                let rook_piece = self.piece_mut(rook);
                rook_piece.has_moved = false;
                rook_piece.first_move = None;
                self.piece_mut(id).has_castled = false;
            }
        }

        if entry.capture {
            let captured = self.captured.pop().ok_or_else(|| {
                ChessError::CorruptedPosition("capture recorded without a captured piece".into())
            })?;
            self.restore(captured.id, captured.roster_index);
        }
        Ok(())
    }

    /// Replaces the pawn on `square` with a new piece of `new_kind`.
    ///
    /// The pawn leaves its side's roster and the new piece is appended to it.
    /// A promoted rook counts as moved so it can never castle. Promotion is not
    /// recorded in the history and cannot be undone.
    pub fn promote_pawn(&mut self, square: Square, new_kind: PieceKind) -> ChessResult<PieceId> {
        if !new_kind.is_promotion_choice() {
            return Err(ChessError::InvalidPromotion(new_kind));
        }
        let pawn = self.occupant_id(square).ok_or(ChessError::EmptySquare(square))?;
        if self.piece(pawn).kind != PieceKind::Pawn {
            return Err(ChessError::NotAPawn(square));
        }
        let side = self.piece(pawn).side;

        self.lift(pawn)?;
        let promoted = self.spawn(new_kind, side, square);
        if new_kind == PieceKind::Rook {
            self.piece_mut(promoted).has_moved = true;
        }
        Ok(promoted)
    }

    fn castling_rook(&self, side: Side, wing: CastleSide, rank: u8) -> ChessResult<PieceId> {
        let corner = wing.rook_corner(rank);
        match self.occupant(corner) {
            Some(piece) if piece.kind == PieceKind::Rook && piece.side == side => {
                self.occupant_id(corner).ok_or(ChessError::CorruptedCastle(corner))
            }
            _ => Err(ChessError::CorruptedCastle(corner)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position_builder::PositionBuilder;

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Square::at(from.0, from.1), Square::at(to.0, to.1))
    }

    #[test]
    fn quiet_move_relocates_and_sets_first_move() {
        let mut position = Position::new_position();
        position.make_move(mv((1, 4), (3, 4))).unwrap();

        assert!(position.is_empty(Square::at(1, 4)));
        let pawn = position.occupant(Square::at(3, 4)).unwrap();
        assert!(pawn.has_moved());
        assert_eq!(pawn.first_move(), Some(Square::at(3, 4)));
        assert_eq!(pawn.square(), Square::at(3, 4));
        assert_eq!(position.history().len(), 1);
        assert!(!position.history()[0].capture);
        position.validate().unwrap();
    }

    #[test]
    fn capture_and_undo_restore_everything() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::Black, PieceKind::King, Square::at(7, 4))
            .piece(Side::White, PieceKind::Rook, Square::at(0, 0))
            .piece(Side::Black, PieceKind::Knight, Square::at(5, 0))
            .piece(Side::Black, PieceKind::Pawn, Square::at(6, 6))
            .build()
            .unwrap();
        let before = position.clone();

        position.make_move(mv((0, 0), (5, 0))).unwrap();
        assert_eq!(position.roster(Side::Black).len(), 2);
        assert_eq!(position.captured_pieces().count(), 1);
        assert!(position.history()[0].capture);
        position.validate().unwrap();

        position.unmake_move().unwrap();
        assert_eq!(position, before);
    }

    #[test]
    fn castling_moves_both_pieces_and_undoes_cleanly() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::White, PieceKind::Rook, Square::at(0, 0))
            .piece(Side::White, PieceKind::Rook, Square::at(0, 7))
            .piece(Side::Black, PieceKind::King, Square::at(7, 4))
            .build()
            .unwrap();
        let before = position.clone();

        position.make_move(mv((0, 4), (0, 6))).unwrap();
        assert_eq!(position.king_square(Side::White), Square::at(0, 6));
        assert!(position.king(Side::White).has_castled());
        let rook = position.occupant(Square::at(0, 5)).unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert!(rook.has_moved());
        assert!(position.is_empty(Square::at(0, 7)));
        assert!(!position.history()[0].capture);
        position.validate().unwrap();

        position.unmake_move().unwrap();
        assert!(!position.king(Side::White).has_castled());
        assert_eq!(position, before);

        position.make_move(mv((0, 4), (0, 2))).unwrap();
        assert_eq!(position.occupant(Square::at(0, 3)).unwrap().kind(), PieceKind::Rook);
        assert!(position.is_empty(Square::at(0, 0)));
        position.unmake_move().unwrap();
        assert_eq!(position, before);
    }

    #[test]
    fn revisiting_the_first_move_square_keeps_the_flag() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::White, PieceKind::Rook, Square::at(0, 0))
            .piece(Side::Black, PieceKind::King, Square::at(7, 4))
            .build()
            .unwrap();

        position.make_move(mv((0, 0), (2, 0))).unwrap();
        position.make_move(mv((7, 4), (7, 3))).unwrap();
        position.make_move(mv((2, 0), (4, 0))).unwrap();
        position.make_move(mv((7, 3), (7, 4))).unwrap();
        position.make_move(mv((4, 0), (2, 0))).unwrap();
        position.unmake_move().unwrap();

        let rook = position.occupant(Square::at(4, 0)).unwrap();
        assert!(rook.has_moved());
        assert_eq!(rook.first_move(), Some(Square::at(2, 0)));
    }

    #[test]
    fn castling_without_rook_is_reported_as_corruption() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::Black, PieceKind::King, Square::at(7, 4))
            .build()
            .unwrap();
        assert_eq!(
            position.make_move(mv((0, 4), (0, 6))),
            Err(ChessError::CorruptedCastle(Square::at(0, 7)))
        );
        assert!(position.history().is_empty());
        assert_eq!(position.king_square(Side::White), Square::at(0, 4));
    }

    #[test]
    fn preconditions_are_reported() {
        let mut position = Position::new_position();
        assert_eq!(position.unmake_move(), Err(ChessError::NothingToUndo));
        assert_eq!(
            position.make_move(mv((3, 3), (4, 3))),
            Err(ChessError::EmptySquare(Square::at(3, 3)))
        );
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::Black, PieceKind::King, Square::at(7, 4))
            .piece(Side::White, PieceKind::Pawn, Square::at(6, 0))
            .build()
            .unwrap();
        let pawn = position.occupant_id(Square::at(6, 0)).unwrap();

        position.make_move(mv((6, 0), (7, 0))).unwrap();
        assert!(position.occupant(Square::at(7, 0)).unwrap().awaits_promotion());
        let queen = position.promote_pawn(Square::at(7, 0), PieceKind::Queen).unwrap();

        let piece = position.occupant(Square::at(7, 0)).unwrap();
        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(piece.side(), Side::White);
        assert_eq!(position.occupant_id(Square::at(7, 0)), Some(queen));
        assert!(!position.roster(Side::White).contains(&pawn));
        assert_eq!(position.roster(Side::White).last(), Some(&queen));
        position.validate().unwrap();
    }

    #[test]
    fn promoted_rook_cannot_castle_and_bad_choices_are_rejected() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::Black, PieceKind::King, Square::at(7, 4))
            .piece(Side::Black, PieceKind::Pawn, Square::at(0, 0))
            .piece(Side::White, PieceKind::Knight, Square::at(3, 3))
            .build()
            .unwrap();
        assert_eq!(
            position.promote_pawn(Square::at(0, 0), PieceKind::King),
            Err(ChessError::InvalidPromotion(PieceKind::King))
        );
        assert_eq!(
            position.promote_pawn(Square::at(3, 3), PieceKind::Queen),
            Err(ChessError::NotAPawn(Square::at(3, 3)))
        );

        let rook = position.promote_pawn(Square::at(0, 0), PieceKind::Rook).unwrap();
        assert!(position.piece(rook).has_moved());
        assert_eq!(position.piece(rook).side(), Side::Black);
    }
}
