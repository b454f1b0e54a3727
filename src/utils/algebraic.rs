//! Square conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! (row, column) squares used internally, where row 0 is rank 8.

use crate::board::chess_types::Square;

/// Convert a square to long algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

/// Convert long algebraic notation (for example: "e4") to a square.
/// Returns `None` for anything that is not a two-character coordinate on
/// the board.
pub fn algebraic_to_square(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Square::new(b'8' - rank, file - b'a')
}
