//! Difficulty-0 random mover.
//!
//! Picks a piece uniformly among those with at least one legal destination,
//! then a destination uniformly among that piece's legal targets. This is not
//! the same distribution as a uniform pick over all legal moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::Rng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Move, Position, Side, Square};

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random mover"
    }

    fn choose_move(&mut self, position: &mut Position, side: Side) -> ChessResult<EngineOutput> {
        let best_move = pick_random_move(position, side, &mut self.rng)?;
        Ok(EngineOutput {
            best_move,
            score: None,
            nodes: 0,
        })
    }
}

pub fn pick_random_move<R: Rng + ?Sized>(
    position: &mut Position,
    side: Side,
    rng: &mut R,
) -> ChessResult<Option<Move>> {
    let origins: Vec<Square> = position.pieces(side).map(|piece| piece.square()).collect();
    let mut movable: Vec<(Square, Vec<Square>)> = Vec::with_capacity(origins.len());
    for from in origins {
        let targets = position.legal_destinations(from)?;
        if !targets.is_empty() {
            movable.push((from, targets));
        }
    }

    let Some((from, targets)) = movable.choose(rng) else {
        return Ok(None);
    };
    Ok(targets.choose(rng).map(|to| Move::new(*from, *to)))
}
