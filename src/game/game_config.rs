//! Who plays each side, and how the engines are tuned.

pub use crate::engines::engine_trait::MAX_DIFFICULTY;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Side;
use crate::search::board_scoring::PieceValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    /// 0 moves at random, `d >= 1` searches `d` plies.
    Computer { difficulty: u8 },
}

impl Player {
    #[inline]
    pub fn is_computer(self) -> bool {
        matches!(self, Player::Computer { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub white: Player,
    pub black: Player,
    /// Seeds every engine RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub piece_values: PieceValues,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::human_vs_human()
    }
}

impl GameConfig {
    pub fn human_vs_human() -> Self {
        Self {
            white: Player::Human,
            black: Player::Human,
            seed: None,
            piece_values: PieceValues::default(),
        }
    }

    /// The human plays `human_side`; the engine takes the other one.
    pub fn versus_computer(human_side: Side, difficulty: u8) -> Self {
        let computer = Player::Computer { difficulty };
        let (white, black) = match human_side {
            Side::White => (Player::Human, computer),
            Side::Black => (computer, Player::Human),
        };
        Self {
            white,
            black,
            ..Self::human_vs_human()
        }
    }

    pub fn self_play(white_difficulty: u8, black_difficulty: u8) -> Self {
        Self {
            white: Player::Computer {
                difficulty: white_difficulty,
            },
            black: Player::Computer {
                difficulty: black_difficulty,
            },
            ..Self::human_vs_human()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn player(&self, side: Side) -> Player {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    pub fn validate(&self) -> ChessResult<()> {
        for side in Side::ALL {
            if let Player::Computer { difficulty } = self.player(side) {
                if difficulty > MAX_DIFFICULTY {
                    return Err(ChessError::InvalidDifficulty(difficulty));
                }
            }
        }
        Ok(())
    }
}
