//! Core value types shared by every layer of the rules engine.
//! Squares are addressed as (rank, file) with rank 0 being White's back rank.

use std::fmt;

pub use crate::game_state::piece::Piece;
pub use crate::game_state::position::Position;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank delta of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Rank on which this side's pawns must be promoted.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

/// Piece kind (side is stored separately on the piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Kinds whose first move is tracked (castling rights, pawn double step).
    #[inline]
    pub const fn tracks_first_move(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::Rook | PieceKind::Pawn)
    }

    /// Kinds a pawn may be promoted to.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A square on the 8x8 board. Always on-board by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Returns `None` for off-board coordinates.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Builds a square from known-good coordinates.
    ///
    /// # Panics
    /// Panics if `rank` or `file` is outside `0..8`.
    #[inline]
    pub const fn at(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square off the board");
        Square { rank, file }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Shifts the square by a relative vector, or `None` if it leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Grid index, `rank * 8 + file`.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    /// All 64 squares, rank by rank starting from rank 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}

/// A move from one square to another. Castling is a king move of two files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Signed file distance travelled.
    #[inline]
    pub const fn file_shift(self) -> i8 {
        self.to.file as i8 - self.from.file as i8
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Stable handle of a piece inside a position's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}
