//! Mailbox board state with reversible history.
//!
//! `Position` owns every piece in a single arena. The 8x8 grid, the per-side
//! rosters and the king handles all store `PieceId`s into that arena, so a
//! capture, a promotion or an undo only adds or removes a handle. A piece's
//! stored square and its grid cell are only ever changed together, through
//! `relocate`, `lift` and `restore`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{pawn_home_rank, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{CapturedPiece, HistoryEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // Every piece ever created in this game, including captured and promoted ones.
    pub(crate) arena: Vec<Piece>,
    pub(crate) grid: [Option<PieceId>; 64],
    // [side] -> that side's pieces in play.
    pub(crate) rosters: [Vec<PieceId>; 2],
    pub(crate) kings: [PieceId; 2],

    // --- Make/unmake stacks ---
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) captured: Vec<CapturedPiece>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_position()
    }
}

impl Position {
    /// Standard initial layout. White's roster lists its back rank then its
    /// pawns, Black's likewise.
    pub fn new_position() -> Self {
        let mut position = Self::blank();
        for side in Side::ALL {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                position.spawn(*kind, side, Square::at(side.back_rank(), file as u8));
            }
            for file in 0..8 {
                position.spawn(PieceKind::Pawn, side, Square::at(pawn_home_rank(side), file));
            }
        }
        position
    }

    /// Position with no pieces. Only valid once `spawn` has placed both kings.
    pub(crate) fn blank() -> Self {
        Position {
            arena: Vec::with_capacity(32),
            grid: [None; 64],
            rosters: [Vec::with_capacity(16), Vec::with_capacity(16)],
            kings: [PieceId(0); 2],
            history: Vec::new(),
            captured: Vec::new(),
        }
    }

    /// Creates a piece on an empty square and enrolls it in its side's roster.
    pub(crate) fn spawn(&mut self, kind: PieceKind, side: Side, square: Square) -> PieceId {
        debug_assert!(self.grid[square.index()].is_none());
        let id = PieceId(self.arena.len() as u32);
        self.arena.push(Piece::new(kind, side, square));
        self.grid[square.index()] = Some(id);
        self.rosters[side.index()].push(id);
        if kind == PieceKind::King {
            self.kings[side.index()] = id;
        }
        id
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.arena[id.index()]
    }

    #[inline]
    pub fn occupant_id(&self, square: Square) -> Option<PieceId> {
        self.grid[square.index()]
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.occupant_id(square).map(|id| self.piece(id))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.grid[square.index()].is_none()
    }

    /// Handles of the pieces `side` still has in play, in roster order.
    #[inline]
    pub fn roster(&self, side: Side) -> &[PieceId] {
        &self.rosters[side.index()]
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.roster(side).iter().map(|id| self.piece(*id))
    }

    #[inline]
    pub fn king_id(&self, side: Side) -> PieceId {
        self.kings[side.index()]
    }

    #[inline]
    pub fn king(&self, side: Side) -> &Piece {
        self.piece(self.king_id(side))
    }

    #[inline]
    pub fn king_square(&self, side: Side) -> Square {
        self.king(side).square
    }

    /// Moves made so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| Move::new(entry.from, entry.to))
    }

    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.captured.iter().map(|c| self.piece(c.id))
    }

    /// Moves a piece to an empty square, keeping grid and stored square in step.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        let from = self.piece(id).square;
        debug_assert_eq!(self.grid[from.index()], Some(id));
        debug_assert!(self.grid[to.index()].is_none());
        self.grid[from.index()] = None;
        self.grid[to.index()] = Some(id);
        self.piece_mut(id).square = to;
    }

    /// Takes a piece off the board and out of its roster. Returns the roster
    /// slot it occupied.
    pub(crate) fn lift(&mut self, id: PieceId) -> ChessResult<usize> {
        let piece = self.piece(id);
        let (side, square) = (piece.side, piece.square);
        let roster = &mut self.rosters[side.index()];
        let slot = roster.iter().position(|x| *x == id).ok_or_else(|| {
            ChessError::CorruptedPosition(format!("piece on {square} missing from roster"))
        })?;
        roster.remove(slot);
        self.grid[square.index()] = None;
        Ok(slot)
    }

    /// Inverse of `lift`.
    pub(crate) fn restore(&mut self, id: PieceId, roster_index: usize) {
        let piece = self.piece(id);
        let (side, square) = (piece.side, piece.square);
        debug_assert!(self.grid[square.index()].is_none());
        self.grid[square.index()] = Some(id);
        self.rosters[side.index()].insert(roster_index, id);
    }

    /// Checks that grid, rosters, stored squares and king handles agree.
    pub fn validate(&self) -> ChessResult<()> {
        let mut seen = vec![false; self.arena.len()];
        for side in Side::ALL {
            let mut kings = 0;
            for id in self.roster(side) {
                let slot = seen.get_mut(id.index()).ok_or_else(|| {
                    ChessError::CorruptedPosition(format!("unknown piece handle {}", id.0))
                })?;
                if *slot {
                    return Err(ChessError::CorruptedPosition(format!(
                        "piece handle {} listed twice",
                        id.0
                    )));
                }
                *slot = true;

                let piece = self.piece(*id);
                if piece.side != side {
                    return Err(ChessError::CorruptedPosition(format!(
                        "{:?} piece on {} in {side:?} roster",
                        piece.side, piece.square
                    )));
                }
                if self.grid[piece.square.index()] != Some(*id) {
                    return Err(ChessError::CorruptedPosition(format!(
                        "grid disagrees with piece on {}",
                        piece.square
                    )));
                }
                if piece.kind == PieceKind::King {
                    kings += 1;
                    if self.king_id(side) != *id {
                        return Err(ChessError::CorruptedPosition(format!(
                            "stale {side:?} king handle"
                        )));
                    }
                }
            }
            if kings != 1 {
                return Err(ChessError::KingCount(side, kings));
            }
        }

        for square in Square::all() {
            if let Some(id) = self.grid[square.index()] {
                if !seen.get(id.index()).copied().unwrap_or(false) {
                    return Err(ChessError::CorruptedPosition(format!(
                        "piece on {square} is on no roster"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_is_valid() {
        let position = Position::new_position();
        position.validate().unwrap();
        assert_eq!(position.roster(Side::White).len(), 16);
        assert_eq!(position.roster(Side::Black).len(), 16);
        assert_eq!(position.king_square(Side::White), Square::at(0, 4));
        assert_eq!(position.king_square(Side::Black), Square::at(7, 4));
        assert!(position.history().is_empty());
    }

    #[test]
    fn initial_layout_places_pieces() {
        let position = Position::new_position();
        let queen = position.occupant(Square::at(0, 3)).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.side(), Side::White);

        let pawn = position.occupant(Square::at(6, 2)).unwrap();
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert_eq!(pawn.side(), Side::Black);
        assert!(!pawn.has_moved());

        for rank in 2..6 {
            for file in 0..8 {
                assert!(position.is_empty(Square::at(rank, file)));
            }
        }
    }

    #[test]
    fn lift_and_restore_round_trip_the_roster_order() {
        let mut position = Position::new_position();
        let before = position.clone();
        let id = position.occupant_id(Square::at(1, 3)).unwrap();
        let slot = position.lift(id).unwrap();
        assert!(position.is_empty(Square::at(1, 3)));
        assert_eq!(position.roster(Side::White).len(), 15);
        position.restore(id, slot);
        assert_eq!(position, before);
    }

    #[test]
    fn validate_detects_desynchronised_grid() {
        let mut position = Position::new_position();
        let id = position.occupant_id(Square::at(1, 0)).unwrap();
        position.grid[Square::at(1, 0).index()] = None;
        position.grid[Square::at(3, 0).index()] = Some(id);
        assert!(matches!(
            position.validate(),
            Err(ChessError::CorruptedPosition(_))
        ));
    }
}
