//! Side, castling, clock, and check bookkeeping that travels with the board.
//!
//! These flags are written by the FEN loader and read by the FEN emitter and
//! the move generator. The move history is append-only and owned by the
//! caller's game loop; this core only derives the fullmove number from it.

use crate::board::chess_types::Color;

/// Per-color check state. Reset to all-false on every load; updated only by
/// explicitly folding a generation report in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckFlags {
    pub in_check_white: bool,
    pub in_double_check_white: bool,
    pub in_check_black: bool,
    pub in_double_check_black: bool,
}

impl CheckFlags {
    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        match color {
            Color::White => self.in_check_white,
            Color::Black => self.in_check_black,
        }
    }

    #[inline]
    pub fn in_double_check(&self, color: Color) -> bool {
        match color {
            Color::White => self.in_double_check_white,
            Color::Black => self.in_double_check_black,
        }
    }

    #[inline]
    pub fn set_check(&mut self, color: Color) {
        match color {
            Color::White => self.in_check_white = true,
            Color::Black => self.in_check_black = true,
        }
    }

    #[inline]
    pub fn set_double_check(&mut self, color: Color) {
        match color {
            Color::White => self.in_double_check_white = true,
            Color::Black => self.in_double_check_black = true,
        }
    }
}

/// Game-level flags beside the piece placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFlags {
    pub side_to_move: Color,
    pub can_castle_short_white: bool,
    pub can_castle_long_white: bool,
    pub can_castle_short_black: bool,
    pub can_castle_long_black: bool,

    /// En-passant target kept verbatim as its FEN token ("-" when absent).
    /// Whether it names a reachable capture square is not this core's
    /// concern.
    pub en_passant_target: String,

    pub halfmove_clock: u32,

    /// Recorded move strings, appended externally by the game loop.
    pub move_history: Vec<String>,

    /// Carried for callers; never computed by this core.
    pub is_game_over: bool,

    pub checks: CheckFlags,
}

impl Default for GameFlags {
    fn default() -> Self {
        Self {
            side_to_move: Color::White,
            can_castle_short_white: false,
            can_castle_long_white: false,
            can_castle_short_black: false,
            can_castle_long_black: false,
            en_passant_target: "-".to_owned(),
            halfmove_clock: 0,
            move_history: Vec::new(),
            is_game_over: false,
            checks: CheckFlags::default(),
        }
    }
}

impl GameFlags {
    /// Fullmove number, always derived from the history length. FEN input
    /// values are not preserved.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.move_history.len() as u32 / 2 + 1
    }
}
