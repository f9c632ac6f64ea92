use crate::game_state::chess_types::{PieceId, Square};

/// Single history record pushed by `make_move` and popped by `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub from: Square,
    pub to: Square,
    pub capture: bool,
    /// The move set the mover's has-moved flag.
    pub first_move: bool,
}

/// A captured piece together with the roster slot it was taken from, so that
/// undo restores the roster in its original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedPiece {
    pub id: PieceId,
    pub roster_index: usize,
}
