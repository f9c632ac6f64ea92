//! Minimax engine for difficulties 1 and up.

use rand::rngs::StdRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Position, Side};
use crate::search::board_scoring::{MaterialScorer, PieceValues};
use crate::search::minimax::select_move;

pub struct MinimaxEngine {
    depth: u8,
    scorer: MaterialScorer,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(depth: u8, values: PieceValues, rng: StdRng) -> Self {
        Self {
            depth,
            scorer: MaterialScorer::new(values),
            rng,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, position: &mut Position, side: Side) -> ChessResult<EngineOutput> {
        let Some(outcome) = select_move(position, self.depth, side, &self.scorer, &mut self.rng)? else {
            debug!(?side, "minimax engine has no move");
            return Ok(EngineOutput::default());
        };
        Ok(EngineOutput {
            best_move: Some(outcome.best_move),
            score: Some(outcome.score),
            nodes: outcome.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_trait::seeded_rng;
    use crate::game_state::chess_types::{Move, PieceKind, Square};
    use crate::game_state::position_builder::PositionBuilder;

    #[test]
    fn takes_a_hanging_queen() {
        let mut position = PositionBuilder::new()
            .piece(Side::White, PieceKind::King, Square::at(0, 0))
            .piece(Side::White, PieceKind::Rook, Square::at(3, 0))
            .piece(Side::Black, PieceKind::Queen, Square::at(3, 6))
            .piece(Side::Black, PieceKind::King, Square::at(7, 7))
            .build()
            .unwrap();
        let mut engine = MinimaxEngine::new(1, PieceValues::default(), seeded_rng(Some(4)));
        let output = engine.choose_move(&mut position, Side::White).unwrap();
        assert_eq!(output.best_move, Some(Move::new(Square::at(3, 0), Square::at(3, 6))));
        assert_eq!(output.score, Some(5.0));
        assert!(output.nodes > 1);
    }

    #[test]
    fn mated_side_gets_empty_output() {
        let mut position = PositionBuilder::new()
            .piece(Side::Black, PieceKind::King, Square::at(7, 7))
            .piece(Side::White, PieceKind::Queen, Square::at(6, 6))
            .piece(Side::White, PieceKind::King, Square::at(5, 5))
            .build()
            .unwrap();
        let mut engine = MinimaxEngine::new(2, PieceValues::default(), seeded_rng(Some(4)));
        assert_eq!(engine.choose_move(&mut position, Side::Black).unwrap(), EngineOutput::default());
    }
}
