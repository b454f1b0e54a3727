//! Game façade over the plane board and flags.
//!
//! `Game` is what collaborating layers (the excluded game loop, tooling,
//! tests) hold: construction from FEN, re-serialization, sliding-move
//! generation entry points, the externally-appended move history, and
//! content-based identity derived from the FEN string.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::chess_rules::STARTING_POSITION_FEN;
use crate::board::chess_types::{Move, Piece, Square};
use crate::board::game_flags::GameFlags;
use crate::board::plane_board::PlaneBoard;
use crate::errors::ChessResult;
use crate::move_generation::move_generator::{
    generate_sliding_moves, DoubleCheckPolicy, SlidingMoveReport,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game::render_board;

#[derive(Debug, Clone)]
pub struct Game {
    board: PlaneBoard,
    flags: GameFlags,
}

impl Game {
    /// Standard starting position.
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let (board, flags) = parse_fen(fen)?;
        Ok(Game { board, flags })
    }

    /// Reload from `fen` (or the standard start) and clear the move history.
    /// On a parse failure the previous state is left untouched.
    pub fn reset(&mut self, fen: Option<&str>) -> ChessResult<()> {
        let (board, flags) = parse_fen(fen.unwrap_or(STARTING_POSITION_FEN))?;
        self.board = board;
        self.flags = flags;
        Ok(())
    }

    /// Current position and flags as a FEN string. The fullmove field is
    /// derived from the recorded history.
    pub fn fen(&self) -> ChessResult<String> {
        generate_fen(&self.board, &self.flags)
    }

    #[inline]
    pub fn board(&self) -> &PlaneBoard {
        &self.board
    }

    #[inline]
    pub fn flags(&self) -> &GameFlags {
        &self.flags
    }

    pub fn piece_at(&self, square: Square) -> ChessResult<Option<Piece>> {
        self.board.piece_at(square)
    }

    /// Pseudo-legal sliding moves for the side to move under the default
    /// double-check policy. No king-safety filtering is applied.
    pub fn legal_moves(&self) -> ChessResult<Vec<Move>> {
        Ok(self.sliding_move_report(DoubleCheckPolicy::default())?.moves)
    }

    /// Full generation report: moves plus the checks observed while
    /// scanning. Pure; stored flags are not touched.
    pub fn sliding_move_report(&self, policy: DoubleCheckPolicy) -> ChessResult<SlidingMoveReport> {
        generate_sliding_moves(&self.board, &self.flags, policy)
    }

    /// Regenerate under the default policy and fold the delivered checks
    /// into the stored flags.
    pub fn refresh_check_flags(&mut self) -> ChessResult<()> {
        let report = self.sliding_move_report(DoubleCheckPolicy::default())?;
        report.checks.fold_into(&mut self.flags.checks);
        Ok(())
    }

    /// Recorded move strings, oldest first.
    pub fn move_history(&self) -> &[String] {
        &self.flags.move_history
    }

    /// Append hook for the game-loop layer; this core never records moves
    /// on its own and does not validate the notation.
    pub fn record_move(&mut self, notation: String) {
        self.flags.move_history.push(notation);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(&self.board))
    }
}

// Identity is the FEN string, as collaborators deduplicate positions by
// content rather than by internal plane layout.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.fen().ok() == other.fen().ok()
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fen().ok().hash(state);
    }
}
