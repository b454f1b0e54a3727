//! Crate root module declarations for the Ply Chess board core.
//!
//! This file exposes the board model, FEN codec, and sliding-piece move
//! generation so tests, benches, and external tooling can import stable
//! module paths.

pub mod errors;

pub mod board {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod game_flags;
    pub mod plane_board;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod ray_scan;
    pub mod sliding_rays;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game;
}
