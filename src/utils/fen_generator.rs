//! Board-to-FEN emitter.

use crate::board::chess_types::Color;
use crate::board::game_flags::GameFlags;
use crate::board::plane_board::PlaneBoard;
use crate::errors::ChessResult;

/// Emit the six-field FEN string for the given board and flags.
///
/// The fullmove field is derived from the move-history length, never from
/// whatever number the position was loaded with.
pub fn generate_fen(board: &PlaneBoard, flags: &GameFlags) -> ChessResult<String> {
    let position = generate_position_field(board)?;
    let side_to_move = match flags.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(flags);

    Ok(format!(
        "{} {} {} {} {} {}",
        position,
        side_to_move,
        castling,
        flags.en_passant_target,
        flags.halfmove_clock,
        flags.fullmove_number()
    ))
}

fn generate_position_field(board: &PlaneBoard) -> ChessResult<String> {
    let view = board.flattened_view()?;
    let mut out = String::new();

    for (row, rank) in view.iter().enumerate() {
        let mut empty_run = 0u8;

        for occupant in rank {
            match occupant {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }

        if row < 7 {
            out.push('/');
        }
    }

    Ok(out)
}

fn generate_castling_field(flags: &GameFlags) -> String {
    let mut out = String::new();

    if flags.can_castle_short_white {
        out.push('K');
    }
    if flags.can_castle_long_white {
        out.push('Q');
    }
    if flags.can_castle_short_black {
        out.push('k');
    }
    if flags.can_castle_long_black {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
