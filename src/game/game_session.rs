//! One game between two players, human or computer.
//!
//! The session owns the position and enforces what the core leaves to its
//! caller: turn order, move legality, the promotion handshake and the
//! checkmate / stalemate verdict after every completed turn.

use tracing::{info, warn};

use crate::engines::engine_trait::{engine_for_difficulty, Engine};
use crate::errors::{ChessError, ChessResult};
use crate::game::game_config::{GameConfig, Player};
use crate::game_state::chess_types::{Move, PieceKind, Position, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a way out.
    Check(Side),
    Checkmate { winner: Side },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passed; `status` is the verdict for the new side to move.
    Played { mv: Move, status: GameStatus },
    /// A pawn reached its far rank. The turn does not pass until
    /// [`Game::choose_promotion`] is called.
    PromotionRequired(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLogEntry {
    pub side: Side,
    pub kind: PieceKind,
    pub mv: Move,
    pub promotion: Option<PieceKind>,
}

pub struct Game {
    position: Position,
    to_move: Side,
    status: GameStatus,
    pending_promotion: Option<Square>,
    log: Vec<MoveLogEntry>,
    config: GameConfig,
    engines: [Option<Box<dyn Engine>>; 2],
}

impl Game {
    pub fn new(config: GameConfig) -> ChessResult<Self> {
        Self::from_position(Position::new_position(), Side::White, config)
    }

    /// Starts from an arbitrary position, e.g. one built for a puzzle. The
    /// side not to move must not be in check.
    pub fn from_position(position: Position, to_move: Side, config: GameConfig) -> ChessResult<Self> {
        config.validate()?;
        position.validate()?;
        if position.in_check(to_move.opposite()) {
            return Err(ChessError::OpponentInCheck(to_move.opposite()));
        }

        let mut engines: [Option<Box<dyn Engine>>; 2] = [None, None];
        for side in Side::ALL {
            if let Player::Computer { difficulty } = config.player(side) {
                // Distinct streams per side so self-play is not mirrored.
                let seed = config.seed.map(|seed| seed.wrapping_add(side.index() as u64));
                engines[side.index()] = Some(engine_for_difficulty(difficulty, seed, config.piece_values)?);
            }
        }

        let mut game = Self {
            position,
            to_move,
            status: GameStatus::InProgress,
            pending_promotion: None,
            log: Vec::new(),
            config,
            engines,
        };
        game.status = game.compute_status()?;
        Ok(game)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn move_log(&self) -> &[MoveLogEntry] {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Legal targets of the piece on `from`, empty unless it belongs to the
    /// side to move and the game is still running.
    pub fn legal_destinations(&mut self, from: Square) -> ChessResult<Vec<Square>> {
        if self.status.is_over() || self.pending_promotion.is_some() {
            return Ok(Vec::new());
        }
        match self.position.occupant(from) {
            Some(piece) if piece.side() == self.to_move => self.position.legal_destinations(from),
            _ => Ok(Vec::new()),
        }
    }

    pub fn submit_move(&mut self, mv: Move) -> ChessResult<MoveOutcome> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }
        if let Some(square) = self.pending_promotion {
            return Err(ChessError::PromotionPending(square));
        }
        let kind = match self.position.occupant(mv.from) {
            None => {
                warn!(%mv, "move from an empty square rejected");
                return Err(ChessError::IllegalMove(mv));
            }
            Some(piece) if piece.side() != self.to_move => {
                warn!(%mv, to_move = ?self.to_move, "move out of turn rejected");
                return Err(ChessError::NotYourTurn(self.to_move));
            }
            Some(piece) => piece.kind(),
        };
        if !self.position.is_legal(self.to_move, mv)? {
            warn!(%mv, "illegal move rejected");
            return Err(ChessError::IllegalMove(mv));
        }

        self.position.make_move(mv)?;
        self.log.push(MoveLogEntry {
            side: self.to_move,
            kind,
            mv,
            promotion: None,
        });

        let awaits_promotion = self
            .position
            .occupant(mv.to)
            .is_some_and(|piece| piece.awaits_promotion());
        if awaits_promotion {
            self.pending_promotion = Some(mv.to);
            return Ok(MoveOutcome::PromotionRequired(mv.to));
        }

        let status = self.finish_turn()?;
        Ok(MoveOutcome::Played { mv, status })
    }

    /// Completes a pending promotion and passes the turn.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> ChessResult<MoveOutcome> {
        let square = self.pending_promotion.ok_or(ChessError::NoPendingPromotion)?;
        self.position.promote_pawn(square, kind)?;
        self.pending_promotion = None;

        let mut mv = Move::new(square, square);
        if let Some(entry) = self.log.last_mut() {
            entry.promotion = Some(kind);
            mv = entry.mv;
        }
        info!(?kind, %square, "pawn promoted");

        let status = self.finish_turn()?;
        Ok(MoveOutcome::Played { mv, status })
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.status.is_over()
            && self.pending_promotion.is_none()
            && self.engines[self.to_move.index()].is_some()
    }

    /// Lets the engine of the side to move play one full turn. Computer
    /// promotions always choose a queen.
    pub fn play_computer_turn(&mut self) -> ChessResult<MoveOutcome> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }
        let side = self.to_move;
        let engine = self.engines[side.index()]
            .as_mut()
            .ok_or(ChessError::NotComputerTurn)?;
        let output = engine.choose_move(&mut self.position, side)?;
        let mv = output.best_move.ok_or(ChessError::GameOver)?;
        info!(?side, engine = engine.name(), %mv, score = ?output.score, nodes = output.nodes, "computer move");

        match self.submit_move(mv)? {
            MoveOutcome::PromotionRequired(_) => self.choose_promotion(PieceKind::Queen),
            played => Ok(played),
        }
    }

    fn finish_turn(&mut self) -> ChessResult<GameStatus> {
        self.to_move = self.to_move.opposite();
        self.status = self.compute_status()?;
        match self.status {
            GameStatus::Checkmate { winner } => info!(?winner, "checkmate"),
            GameStatus::Stalemate => info!("stalemate"),
            GameStatus::Check(side) => info!(?side, "check"),
            GameStatus::InProgress => {}
        }
        Ok(self.status)
    }

    fn compute_status(&mut self) -> ChessResult<GameStatus> {
        let side = self.to_move;
        let in_check = self.position.in_check(side);
        let status = match (self.position.has_legal_move(side)?, in_check) {
            (false, true) => GameStatus::Checkmate {
                winner: side.opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(side),
            (true, false) => GameStatus::InProgress,
        };
        Ok(status)
    }
}
