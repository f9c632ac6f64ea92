//! Perft: exhaustive legal-move tree counting.
//!
//! Used as a correctness oracle for move generation and as a benchmark
//! workload. Leaf moves are classified as captures, castles, checks and
//! checkmates the same way the game session reports them.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::CastleSide;
use crate::game_state::chess_types::{Move, PieceKind, Position, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts the leaves of the legal move tree `depth` plies deep with `side`
/// to move. The position is restored before returning.
pub fn perft(position: &mut Position, side: Side, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in position.legal_moves(side)? {
        let mut local = PerftCounts::default();
        perft_recurse(position, mv, side, depth, 1, &mut local)?;
        total.merge(local);
    }
    Ok(total)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(position: &mut Position, side: Side, depth: u8) -> ChessResult<Vec<(Move, usize)>> {
    let mut divided = Vec::new();
    if depth == 0 {
        return Ok(divided);
    }
    for mv in position.legal_moves(side)? {
        let mut local = PerftCounts::default();
        perft_recurse(position, mv, side, depth, 1, &mut local)?;
        divided.push((mv, local.nodes));
    }
    Ok(divided)
}

fn perft_recurse(
    position: &mut Position,
    mv: Move,
    side: Side,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        let is_capture = position.occupant(mv.to).is_some();
        let is_castle = matches!(
            position.occupant(mv.from),
            Some(piece) if piece.kind() == PieceKind::King
        ) && CastleSide::from_file_shift(mv.file_shift()).is_some();

        position.make_move(mv)?;
        counts.nodes += 1;
        if is_capture {
            counts.captures += 1;
        }
        if is_castle {
            counts.castles += 1;
        }
        let opponent = side.opposite();
        if position.in_check(opponent) {
            counts.checks += 1;
            if !position.has_legal_move(opponent)? {
                counts.checkmates += 1;
            }
        }
        return position.unmake_move();
    }

    position.make_move(mv)?;
    let opponent = side.opposite();
    for child in position.legal_moves(opponent)? {
        perft_recurse(position, child, opponent, search_depth, current_depth + 1, counts)?;
    }
    position.unmake_move()
}
