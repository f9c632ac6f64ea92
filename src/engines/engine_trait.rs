//! Engine abstraction used by the game session.
//!
//! Computer players of every difficulty sit behind one trait so the session
//! can drive either side without knowing how a move is picked.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Move, Position, Side};
use crate::search::board_scoring::{PieceValues, Score};

/// Highest selectable difficulty; difficulty `d >= 1` searches `d` plies.
pub const MAX_DIFFICULTY: u8 = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub score: Option<Score>,
    pub nodes: u64,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// Picks a move for `side`. `position` is borrowed mutably for
    /// make/unmake probing and is left unchanged.
    fn choose_move(&mut self, position: &mut Position, side: Side) -> ChessResult<EngineOutput>;
}

/// Seeded when `seed` is given, otherwise drawn from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Difficulty 0 is the random mover; anything above searches that many plies.
pub fn engine_for_difficulty(
    difficulty: u8,
    seed: Option<u64>,
    values: PieceValues,
) -> ChessResult<Box<dyn Engine>> {
    match difficulty {
        0 => Ok(Box::new(RandomEngine::new(seeded_rng(seed)))),
        1..=MAX_DIFFICULTY => Ok(Box::new(MinimaxEngine::new(
            difficulty,
            values,
            seeded_rng(seed),
        ))),
        _ => Err(ChessError::InvalidDifficulty(difficulty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_covers_every_difficulty() {
        for difficulty in 0..=MAX_DIFFICULTY {
            let engine = engine_for_difficulty(difficulty, Some(1), PieceValues::default()).unwrap();
            assert!(!engine.name().is_empty());
        }
        assert_eq!(
            engine_for_difficulty(MAX_DIFFICULTY + 1, None, PieceValues::default()).err(),
            Some(ChessError::InvalidDifficulty(MAX_DIFFICULTY + 1))
        );
    }

    #[test]
    fn engines_leave_the_position_unchanged() {
        for difficulty in 0..=2 {
            let mut engine = engine_for_difficulty(difficulty, Some(11), PieceValues::default()).unwrap();
            let mut position = Position::new_position();
            let before = position.clone();
            let output = engine.choose_move(&mut position, Side::White).unwrap();
            assert!(output.best_move.is_some());
            assert_eq!(position, before);
        }
    }
}
