//! FEN-to-board parser.
//!
//! Builds the plane board and game flags from a Forsyth-Edwards Notation
//! string. Any structural problem aborts the load; no partial board is
//! returned.

use log::debug;

use crate::board::chess_types::{Color, Piece, Square};
use crate::board::game_flags::GameFlags;
use crate::board::plane_board::PlaneBoard;
use crate::errors::{ChessError, ChessResult};

fn malformed(reason: impl Into<String>) -> ChessError {
    ChessError::MalformedFen { reason: reason.into() }
}

/// Parse a six-field FEN string into piece placement and game flags.
///
/// The fullmove field must be numeric but is not stored: the emitted value
/// is always re-derived from the move-history length, so arbitrary input
/// fullmove numbers do not survive a round trip.
pub fn parse_fen(fen: &str) -> ChessResult<(PlaneBoard, GameFlags)> {
    let mut parts = fen.split(' ');

    let position_part = parts.next().ok_or_else(|| malformed("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| malformed("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| malformed("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| malformed("missing en-passant target"))?;
    let halfmove_part = parts.next().ok_or_else(|| malformed("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| malformed("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(malformed("extra trailing fields"));
    }

    let mut board = PlaneBoard::new();
    parse_position(position_part, &mut board)?;

    let mut flags = GameFlags::default();
    flags.side_to_move = parse_side_to_move(side_part)?;

    flags.can_castle_short_white = castling_part.contains('K');
    flags.can_castle_long_white = castling_part.contains('Q');
    flags.can_castle_short_black = castling_part.contains('k');
    flags.can_castle_long_black = castling_part.contains('q');

    flags.en_passant_target = en_passant_part.to_owned();

    flags.halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid halfmove clock: {halfmove_part}")))?;

    fullmove_part
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid fullmove number: {fullmove_part}")))?;

    debug!("loaded position {position_part} with {side_part} to move");

    Ok((board, flags))
}

fn parse_position(position_part: &str, board: &mut PlaneBoard) -> ChessResult<()> {
    board.clear_all();

    let ranks: Vec<&str> = position_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed(format!("expected 8 ranks, got {}", ranks.len())));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for symbol in rank_str.chars() {
            if let Some(run) = symbol.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(malformed(format!("invalid empty-square count '{symbol}'")));
                }
                col += run as usize;
                continue;
            }

            let piece =
                Piece::from_fen_char(symbol).ok_or(ChessError::InvalidPiece { symbol })?;

            if col >= 8 {
                return Err(ChessError::RankOverflow { rank: row, columns: col + 1 });
            }

            board.set(Square::from_parts(row as u8, col as u8), piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::RankOverflow { rank: row, columns: col });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(malformed(format!("invalid side-to-move field: {side_part}"))),
    }
}
