use crate::game_state::chess_types::{PieceKind, Side, Square};

/// A piece in play (or captured, while it waits on the capture stack).
/// Identity is the arena slot: the same record is moved, captured and restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) side: Side,
    pub(crate) square: Square,
    pub(crate) has_moved: bool,
    /// Destination of the piece's first move, cleared when that move is undone.
    pub(crate) first_move: Option<Square>,
    pub(crate) has_castled: bool,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Piece {
            kind,
            side,
            square,
            has_moved: false,
            first_move: None,
            has_castled: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub fn first_move(&self) -> Option<Square> {
        self.first_move
    }

    /// Only ever set on kings.
    #[inline]
    pub fn has_castled(&self) -> bool {
        self.has_castled
    }

    /// Whether this pawn stands on its far rank and must be promoted.
    #[inline]
    pub fn awaits_promotion(&self) -> bool {
        self.kind == PieceKind::Pawn && self.square.rank() == self.side.promotion_rank()
    }
}
