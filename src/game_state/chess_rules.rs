//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed geometry of castling: which files the king
//! and rook leave from and land on, and which squares must be empty or safe.

use crate::game_state::chess_types::{PieceKind, Side, Square};

/// Back-rank layout from file 0 to file 7, identical for both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_FILE: u8 = 4;

#[inline]
pub const fn pawn_home_rank(side: Side) -> u8 {
    match side {
        Side::White => 1,
        Side::Black => 6,
    }
}

#[inline]
pub const fn king_home_square(side: Side) -> Square {
    Square::at(side.back_rank(), KING_HOME_FILE)
}

/// The two castling wings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    /// Classifies a king move by its file shift; only a two-file shift castles.
    #[inline]
    pub const fn from_file_shift(shift: i8) -> Option<Self> {
        match shift {
            -2 => Some(CastleSide::Queenside),
            2 => Some(CastleSide::Kingside),
            _ => None,
        }
    }

    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }

    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Queenside => 2,
            CastleSide::Kingside => 6,
        }
    }

    /// The rook lands next to the king, on the side it came from.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 5,
        }
    }

    /// Files strictly between king and rook; all must be empty.
    #[inline]
    pub const fn empty_files(self) -> &'static [u8] {
        match self {
            CastleSide::Queenside => &[1, 2, 3],
            CastleSide::Kingside => &[5, 6],
        }
    }

    /// Files the king passes through or lands on; none may be attacked.
    #[inline]
    pub const fn safe_files(self) -> &'static [u8] {
        match self {
            CastleSide::Queenside => &[2, 3],
            CastleSide::Kingside => &[5, 6],
        }
    }

    #[inline]
    pub const fn rook_corner(self, rank: u8) -> Square {
        Square::at(rank, self.rook_file())
    }

    #[inline]
    pub const fn rook_landing(self, rank: u8) -> Square {
        Square::at(rank, self.rook_target_file())
    }
}
