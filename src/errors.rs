//! Error types shared by the board model, FEN codec, and move generator.

use thiserror::Error;

use crate::board::chess_types::Square;

/// Result type alias for fallible board operations.
pub type ChessResult<T> = Result<T, ChessError>;

/// All failure modes surfaced by the board core. Decode errors abort
/// construction; no partially-loaded board is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN string has the wrong structure: bad field count, bad rank
    /// count, an unparseable numeric field, or an invalid side-to-move token.
    #[error("malformed FEN: {reason}")]
    MalformedFen { reason: String },

    /// The position field contains a character that is neither an empty-run
    /// digit nor a recognized piece letter.
    #[error("invalid piece character '{symbol}' in FEN position field")]
    InvalidPiece { symbol: char },

    /// A position-field rank does not cover exactly 8 columns.
    #[error("FEN rank {rank} covers {columns} columns, expected exactly 8")]
    RankOverflow { rank: usize, columns: usize },

    /// More than one piece plane is set on a single square.
    #[error("board has multiple pieces stacked on {square}")]
    InvalidState { square: Square },
}
