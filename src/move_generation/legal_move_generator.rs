//! Full legal move generation pipeline.
//!
//! Generates each piece's shape-legal destinations, plays every candidate on
//! the real position, keeps it if the mover's king is not attacked afterwards,
//! and takes it back. The position is left exactly as it was found.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Move, PieceId, Position, Side, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::piece_catalog::pseudo_legal_into;

impl Position {
    /// Every legal move of `side`, in roster order then generation order.
    pub fn legal_moves(&mut self, side: Side) -> ChessResult<Vec<Move>> {
        let ids = self.roster(side).to_vec();
        let mut legal = Vec::with_capacity(48);
        let mut buffer = Vec::with_capacity(32);
        for id in ids {
            self.collect_legal_for(id, &mut buffer, &mut legal)?;
        }
        Ok(legal)
    }

    /// Legal destinations of the piece on `from`, empty if the square is empty.
    pub fn legal_destinations(&mut self, from: Square) -> ChessResult<Vec<Square>> {
        let Some(id) = self.occupant_id(from) else {
            return Ok(Vec::new());
        };
        let mut legal = Vec::new();
        self.collect_legal_for(id, &mut Vec::new(), &mut legal)?;
        Ok(legal.into_iter().map(|mv| mv.to).collect())
    }

    /// Stops at the first legal move found.
    pub fn has_legal_move(&mut self, side: Side) -> ChessResult<bool> {
        let ids = self.roster(side).to_vec();
        let mut buffer = Vec::with_capacity(32);
        for id in ids {
            buffer.clear();
            pseudo_legal_into(self, id, &mut buffer);
            let from = self.piece(id).square();
            for to in buffer.iter().copied() {
                if self.keeps_king_safe(Move::new(from, to), side)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    pub fn is_legal(&mut self, side: Side, mv: Move) -> ChessResult<bool> {
        match self.occupant(mv.from) {
            Some(piece) if piece.side() == side => {}
            _ => return Ok(false),
        }
        Ok(self.legal_destinations(mv.from)?.contains(&mv.to))
    }

    fn collect_legal_for(
        &mut self,
        id: PieceId,
        buffer: &mut Vec<Square>,
        legal: &mut Vec<Move>,
    ) -> ChessResult<()> {
        buffer.clear();
        pseudo_legal_into(self, id, buffer);
        let piece = self.piece(id);
        let (from, side) = (piece.square(), piece.side());
        for to in buffer.iter().copied() {
            let mv = Move::new(from, to);
            if self.keeps_king_safe(mv, side)? {
                legal.push(mv);
            }
        }
        Ok(())
    }

    /// Plays `mv` speculatively and reports whether `side`'s king is safe.
    fn keeps_king_safe(&mut self, mv: Move, side: Side) -> ChessResult<bool> {
        self.make_move(mv)?;
        let safe = !is_king_in_check(self, side);
        self.unmake_move()?;
        Ok(safe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::position_builder::PositionBuilder;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    #[test]
    fn twenty_moves_from_the_start() {
        let mut position = Position::new_position();
        let white = position.legal_moves(Side::White).unwrap();
        assert_eq!(white.len(), 20);
        let knight_moves = white
            .iter()
            .filter(|mv| position.occupant(mv.from).unwrap().kind() == PieceKind::Knight)
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn black_has_twenty_replies_to_any_opening_move() {
        let mut position = Position::new_position();
        for mv in position.legal_moves(Side::White).unwrap() {
            position.make_move(mv).unwrap();
            assert_eq!(position.legal_moves(Side::Black).unwrap().len(), 20);
            position.unmake_move().unwrap();
        }
    }

    #[test]
    fn generation_leaves_the_position_untouched() {
        let mut position = Position::new_position();
        let before = position.clone();
        position.legal_moves(Side::White).unwrap();
        position.legal_moves(Side::Black).unwrap();
        assert_eq!(position, before);
    }

    #[test]
    fn pinned_piece_may_not_leave_the_line() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::White, PieceKind::Knight, Square::at(1, 4))
            .piece(Side::Black, PieceKind::Rook, Square::at(7, 4))
            .piece(Side::Black, PieceKind::King, Square::at(7, 0))
            .build()
            .unwrap();
        assert!(position.legal_destinations(Square::at(1, 4)).unwrap().is_empty());
        assert!(!position
            .is_legal(Side::White, Move::new(Square::at(1, 4), Square::at(3, 5)))
            .unwrap());
    }

    #[test]
    fn check_must_be_answered() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::White, PieceKind::Rook, Square::at(2, 0))
            .piece(Side::White, PieceKind::Pawn, Square::at(1, 7))
            .piece(Side::Black, PieceKind::Rook, Square::at(5, 4))
            .piece(Side::Black, PieceKind::King, Square::at(7, 0))
            .build()
            .unwrap();
        assert!(position.in_check(Side::White));
        let moves = position.legal_moves(Side::White).unwrap();
        // Rook interposes on e3, or the king steps off the file.
        assert!(moves.contains(&Move::new(Square::at(2, 0), Square::at(2, 4))));
        assert!(moves.iter().all(|mv| mv.from != Square::at(1, 7)));
        assert!(!moves.contains(&Move::new(Square::at(0, 4), Square::at(1, 4))));
    }

    #[test]
    fn castling_is_offered_among_legal_moves() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 4))
            .piece(Side::White, PieceKind::Rook, Square::at(0, 0))
            .piece(Side::White, PieceKind::Rook, Square::at(0, 7))
            .piece(Side::Black, PieceKind::King, Square::at(7, 4))
            .build()
            .unwrap();
        let moves = position.legal_moves(Side::White).unwrap();
        let king = Square::at(0, 4);
        assert!(moves.contains(&Move::new(king, Square::at(0, 2))));
        assert!(moves.contains(&Move::new(king, Square::at(0, 6))));

        position.make_move(Move::new(king, Square::at(0, 6))).unwrap();
        assert!(position.king(Side::White).has_castled());
        position.unmake_move().unwrap();
        assert!(!position.king(Side::White).has_castled());
    }

    #[test]
    fn checkmate_and_stalemate_are_distinguishable() {
        let mut mate = PositionBuilder::new()
            .piece(Side::Black, PieceKind::King, Square::at(7, 7))
            .piece(Side::White, PieceKind::Queen, Square::at(6, 6))
            .piece(Side::White, PieceKind::King, Square::at(5, 5))
            .build()
            .unwrap();
        assert!(mate.legal_moves(Side::Black).unwrap().is_empty());
        assert!(mate.in_check(Side::Black));
        assert!(!mate.has_legal_move(Side::Black).unwrap());

        let mut stalemate = PositionBuilder::new()
            .piece(Side::Black, PieceKind::King, Square::at(7, 7))
            .piece(Side::White, PieceKind::Queen, Square::at(6, 5))
            .piece(Side::White, PieceKind::King, Square::at(0, 0))
            .build()
            .unwrap();
        assert!(stalemate.legal_moves(Side::Black).unwrap().is_empty());
        assert!(!stalemate.in_check(Side::Black));
    }

    #[test]
    fn random_games_keep_make_unmake_exact() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..4 {
            let mut position = Position::new_position();
            let mut side = Side::White;
            for _ in 0..60 {
                let moves = position.legal_moves(side).unwrap();
                for mv in &moves {
                    let before = position.clone();
                    position.make_move(*mv).unwrap();
                    position.validate().unwrap();
                    position.unmake_move().unwrap();
                    assert_eq!(position, before);
                }
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                position.make_move(*mv).unwrap();
                side = side.opposite();
            }
            position.validate().unwrap();
        }
    }
}
