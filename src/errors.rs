//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type of the crate. Variants fall in three
//! groups:
//! - precondition violations on `Position` (`EmptySquare`, `NothingToUndo`,
//!   `NotAPawn`, `InvalidPromotion`);
//! - internal corruption (`CorruptedCastle`, `CorruptedPosition`), which
//!   indicates a bug in move generation and is not meant to be recovered from;
//! - session and setup errors (`IllegalMove`, `NotYourTurn`, `KingCount`, ...)
//!   that a front end is expected to surface to the user.

use thiserror::Error;

use crate::game_state::chess_types::{Move, PieceKind, Side, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A move or promotion referenced a square with no piece on it.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// `unmake_move` was called with an empty history.
    #[error("no move to undo")]
    NothingToUndo,

    /// A king made a two-file move but no rook of its side sat on the corner.
    #[error("castling rook missing from {0}")]
    CorruptedCastle(Square),

    /// The grid, rosters and king handles disagree with each other.
    #[error("corrupted position: {0}")]
    CorruptedPosition(String),

    #[error("piece on {0} is not a pawn")]
    NotAPawn(Square),

    #[error("cannot promote a pawn to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("{0:?} must have exactly one king, found {1}")]
    KingCount(Side, usize),

    #[error("square {0} is occupied twice")]
    SquareOccupied(Square),

    /// The side that just moved was left in check, so its king could be taken.
    #[error("{0:?} is in check while it is not their move")]
    OpponentInCheck(Side),

    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// The piece being moved does not belong to the side to move.
    #[error("it is {0:?}'s turn")]
    NotYourTurn(Side),

    #[error("the game is over")]
    GameOver,

    /// A pawn is waiting on its far rank for a promotion choice.
    #[error("a promotion choice is pending on {0}")]
    PromotionPending(Square),

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("difficulty {0} is out of range")]
    InvalidDifficulty(u8),

    #[error("the side to move is not played by an engine")]
    NotComputerTurn,
}

pub type ChessResult<T> = Result<T, ChessError>;
