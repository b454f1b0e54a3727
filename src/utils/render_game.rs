//! Diagnostic board rendering.
//!
//! Produces the bordered text grid used for terminal inspection: one FEN
//! character per square, a space for empty squares. Rendering tolerates
//! corrupt boards (it shows the lowest set plane) so it stays usable while
//! debugging exactly the states the strict accessors reject.

use crate::board::chess_types::Square;
use crate::board::plane_board::PlaneBoard;

/// Render the board as a bordered 8x8 grid, top rank first.
pub fn render_board(board: &PlaneBoard) -> String {
    let mut out = String::new();

    out.push_str(" ---------------\n");

    for row in 0..8u8 {
        out.push('|');
        for col in 0..8u8 {
            let square = Square::from_parts(row, col);
            match board.first_piece_at(square) {
                Some(piece) => out.push(piece.fen_char()),
                None => out.push(' '),
            }
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(" ---------------");

    out
}
