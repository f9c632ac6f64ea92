//! Fixed-depth minimax search.
//!
//! White levels maximize, Black levels minimize, scores are White-positive.
//! There is no pruning, so the root sees every move that ties for the best
//! score and picks among them with the caller's random source. Every node
//! is explored with make/unmake on the caller's position, which is restored
//! exactly when the search returns.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Move, Position, Side};
use crate::search::board_scoring::{terminal_score, BoardScorer, Score};

/// Root scores closer than this are treated as equal.
pub const TIE_EPSILON: Score = 1e-4;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub score: Score,
    /// Every root move that reached `score`, in generation order.
    pub candidates: Vec<Move>,
    pub nodes: u64,
}

/// Picks a move for `side` by searching `depth` plies.
///
/// Returns `Ok(None)` when `side` has no legal move. At depth 0 every legal
/// move shares the static score of the current position.
pub fn select_move<S, R>(
    position: &mut Position,
    depth: u8,
    side: Side,
    scorer: &S,
    rng: &mut R,
) -> ChessResult<Option<SearchOutcome>>
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let root_moves = position.legal_moves(side)?;
    if root_moves.is_empty() {
        debug!(?side, depth, "no legal moves at the root");
        return Ok(None);
    }

    let mut nodes = 1u64;
    let (score, candidates) = if depth == 0 {
        (scorer.score(position), root_moves)
    } else {
        let mut best: Option<Score> = None;
        let mut candidates = Vec::new();
        for mv in root_moves {
            position.make_move(mv)?;
            let child = minimax(position, depth - 1, side.opposite(), scorer, &mut nodes);
            position.unmake_move()?;
            let child = child?;
            trace!(%mv, score = child, "root move scored");

            match best {
                Some(current) if (child - current).abs() <= TIE_EPSILON => candidates.push(mv),
                Some(current) if !improves(side, child, current) => {}
                _ => {
                    best = Some(child);
                    candidates.clear();
                    candidates.push(mv);
                }
            }
        }
        match best {
            Some(score) => (score, candidates),
            None => return Ok(None),
        }
    };

    let Some(best_move) = candidates.choose(rng).copied() else {
        return Ok(None);
    };
    debug!(
        ?side,
        depth,
        nodes,
        score,
        ties = candidates.len(),
        %best_move,
        "search finished"
    );
    Ok(Some(SearchOutcome {
        best_move,
        score,
        candidates,
        nodes,
    }))
}

/// Value of the position with `side` to move, searched `depth` plies deep.
pub fn minimax<S>(
    position: &mut Position,
    depth: u8,
    side: Side,
    scorer: &S,
    nodes: &mut u64,
) -> ChessResult<Score>
where
    S: BoardScorer + ?Sized,
{
    *nodes += 1;
    if depth == 0 {
        return Ok(scorer.score(position));
    }

    let moves = position.legal_moves(side)?;
    if moves.is_empty() {
        return Ok(terminal_score(position));
    }

    let mut best = match side {
        Side::White => Score::NEG_INFINITY,
        Side::Black => Score::INFINITY,
    };
    for mv in moves {
        position.make_move(mv)?;
        let child = minimax(position, depth - 1, side.opposite(), scorer, nodes);
        position.unmake_move()?;
        let child = child?;
        if improves(side, child, best) {
            best = child;
        }
    }
    Ok(best)
}

#[inline]
fn improves(side: Side, candidate: Score, best: Score) -> bool {
    match side {
        Side::White => candidate > best,
        Side::Black => candidate < best,
    }
}
