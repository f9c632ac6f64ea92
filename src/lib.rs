//! Crate root module declarations for the mailbox chess engine.
//!
//! Exposes the rules core (position, move shapes, legality, make/unmake),
//! the fixed-depth search, the engines built on it, and a game session that
//! enforces turn order and the promotion handshake for front ends.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod position;
    pub mod position_builder;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_catalog;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game {
    pub mod game_config;
    pub mod game_session;
}

pub mod utils {
    pub mod render_game_state;
}
