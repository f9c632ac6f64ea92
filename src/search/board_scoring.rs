//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search stays independent of the heuristic by delegating static position
//! scoring to [`BoardScorer`]. Scores are always White-positive: a higher
//! number is better for White regardless of whose turn it is.

use crate::game_state::chess_types::{Piece, PieceKind, Position, Side};

pub type Score = f32;

/// Magnitude of a mate found inside the search horizon.
pub const MATE_SCORE: Score = 999.0;

pub trait BoardScorer {
    /// Static evaluation, White minus Black.
    fn score(&self, position: &Position) -> Score;
}

/// Evaluation weights. Passed into the scorer so engines can be tuned per
/// game without touching shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceValues {
    pub king: Score,
    pub queen: Score,
    pub rook: Score,
    pub bishop: Score,
    pub knight: Score,
    pub pawn: Score,
    pub central_knight_bonus: Score,
    pub advanced_central_pawn_bonus: Score,
    pub castled_king_bonus: Score,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            king: 0.0,
            queen: 9.0,
            rook: 5.0,
            bishop: 3.5,
            knight: 3.0,
            pawn: 1.0,
            central_knight_bonus: 0.2,
            advanced_central_pawn_bonus: 0.1,
            castled_king_bonus: 1.0,
        }
    }
}

impl PieceValues {
    /// Files c through f.
    pub const CENTRAL_FILES: std::ops::RangeInclusive<u8> = 2..=5;

    #[inline]
    pub fn value(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn => self.pawn,
        }
    }

    /// Base value plus the positional bonuses that apply to this piece.
    pub fn piece_score(&self, piece: &Piece) -> Score {
        let central = Self::CENTRAL_FILES.contains(&piece.square().file());
        let bonus = match piece.kind() {
            PieceKind::Knight if central => self.central_knight_bonus,
            PieceKind::Pawn if central && piece.has_moved() => self.advanced_central_pawn_bonus,
            PieceKind::King if piece.has_castled() => self.castled_king_bonus,
            _ => 0.0,
        };
        self.value(piece.kind()) + bonus
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialScorer {
    pub values: PieceValues,
}

impl MaterialScorer {
    pub const fn new(values: PieceValues) -> Self {
        Self { values }
    }

    fn side_total(&self, position: &Position, side: Side) -> Score {
        position
            .pieces(side)
            .map(|piece| self.values.piece_score(piece))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> Score {
        self.side_total(position, Side::White) - self.side_total(position, Side::Black)
    }
}

/// Score of a node where the side to move has no legal reply: a mate for
/// whichever side is not in check, otherwise a stalemate worth zero.
pub fn terminal_score(position: &Position) -> Score {
    if position.in_check(Side::Black) {
        MATE_SCORE
    } else if position.in_check(Side::White) {
        -MATE_SCORE
    } else {
        0.0
    }
}
