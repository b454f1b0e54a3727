//! Direction tables and the shared ray walk for sliding pieces.
//!
//! Directions are fixed `(d_row, d_col)` arrays with a parallel blocked
//! array per walk, so iteration order is deterministic and no keyed lookup
//! happens on the hot path.

use crate::board::chess_types::{Move, Piece, Square};
use crate::board::plane_board::PlaneBoard;
use crate::errors::ChessResult;
use crate::move_generation::ray_scan::probe_ray;

/// Orthogonal deltas in row-major coordinates: up, down, left, right.
/// "Up" is toward row 0, the FEN-first rank.
pub const LATERAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal deltas.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk all four `directions` out from `origin`, appending every emitted
/// move and returning how many probes landed on the enemy king.
///
/// Each direction carries its own blocked toggle and stops independently at
/// the first edge, capture, or friendly piece.
pub fn walk_rays(
    board: &PlaneBoard,
    origin: Square,
    mover: Piece,
    directions: &[(i8, i8); 4],
    moves: &mut Vec<Move>,
) -> ChessResult<u8> {
    let mut blocked = [false; 4];
    let mut checks_delivered = 0u8;

    for steps in 1..=7u8 {
        for (index, (d_row, d_col)) in directions.iter().enumerate() {
            if blocked[index] {
                continue;
            }

            let probe = probe_ray(board, origin, mover, *d_row, *d_col, steps)?;
            blocked[index] = probe.blocked;

            if let Some(emitted) = probe.emitted {
                moves.push(emitted);
            }
            if probe.gives_check {
                checks_delivered += 1;
            }
        }
    }

    Ok(checks_delivered)
}
