//! Single-step ray probe used by the sliding-piece generator.
//!
//! A probe inspects exactly one square along a direction and reports whether
//! the ray can continue, which move (if any) lands there, and whether that
//! square holds the enemy king. It is a pure function of its inputs.

use crate::board::chess_types::{Move, Piece, PieceKind, Square};
use crate::board::plane_board::PlaneBoard;
use crate::errors::ChessResult;

/// Outcome of probing one square along a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayProbe {
    /// The ray cannot continue past the probed square (edge, capture, or
    /// friendly blocker).
    pub blocked: bool,
    /// Move emitted onto the probed square, if any.
    pub emitted: Option<Move>,
    /// The probed square holds the enemy king.
    pub gives_check: bool,
}

impl RayProbe {
    const fn blocked_without_move() -> Self {
        RayProbe { blocked: true, emitted: None, gives_check: false }
    }
}

/// Probe the square `steps` away from `origin` along `(d_row, d_col)` for
/// `mover`. Off-board squares and friendly occupants block without a move;
/// vacant squares emit a quiet move; enemy occupants emit a capture, block,
/// and flag check when the occupant is the king.
pub fn probe_ray(
    board: &PlaneBoard,
    origin: Square,
    mover: Piece,
    d_row: i8,
    d_col: i8,
    steps: u8,
) -> ChessResult<RayProbe> {
    let Some(target) = origin.offset(d_row, d_col, steps) else {
        return Ok(RayProbe::blocked_without_move());
    };

    let emitted = Move { from: origin, to: target, piece: mover };

    match board.piece_at(target)? {
        None => Ok(RayProbe {
            blocked: false,
            emitted: Some(emitted),
            gives_check: false,
        }),
        Some(occupant) if occupant.color != mover.color => Ok(RayProbe {
            blocked: true,
            emitted: Some(emitted),
            gives_check: occupant.kind == PieceKind::King,
        }),
        Some(_) => Ok(RayProbe::blocked_without_move()),
    }
}
