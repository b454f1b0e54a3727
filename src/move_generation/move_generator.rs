//! Pseudo-legal sliding-move generation for rooks, bishops, and queens.
//!
//! Generation is pure: the result carries both the move list and the checks
//! observed while scanning, and callers decide when to fold those into the
//! stored flags. No king-safety filtering happens here; a move that leaves
//! the mover's own king attacked is still emitted.

use log::trace;

use crate::board::chess_types::{Color, Move, Piece, PieceKind, Square};
use crate::board::game_flags::{CheckFlags, GameFlags};
use crate::board::plane_board::PlaneBoard;
use crate::errors::ChessResult;
use crate::move_generation::sliding_rays::{
    walk_rays, DIAGONAL_DIRECTIONS, LATERAL_DIRECTIONS,
};

/// How the generator treats a side already flagged in double check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DoubleCheckPolicy {
    /// Suppress sliding moves while the mover is in double check; only a
    /// king move can resolve that position.
    #[default]
    SuppressWhenDoubleChecked,
    /// Reproduce the inherited guard that generated sliding moves only
    /// while the mover was flagged in double check.
    LegacyOnlyWhenDoubleChecked,
}

/// Checks delivered against each king during one generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    checks_on: [u8; 2],
}

impl CheckReport {
    #[inline]
    fn record(&mut self, target: Color, count: u8) {
        let slot = &mut self.checks_on[target.parity()];
        *slot = slot.saturating_add(count);
    }

    /// At least one generated move lands on `target`'s king.
    #[inline]
    pub fn gives_check(&self, target: Color) -> bool {
        self.checks_on[target.parity()] > 0
    }

    /// Two or more generated moves land on `target`'s king.
    #[inline]
    pub fn gives_double_check(&self, target: Color) -> bool {
        self.checks_on[target.parity()] >= 2
    }

    /// Fold this report into stored flags. Sets and never clears, so the
    /// caller resets the flags when recomputing from scratch.
    pub fn fold_into(&self, flags: &mut CheckFlags) {
        for color in [Color::White, Color::Black] {
            if self.gives_check(color) {
                flags.set_check(color);
            }
            if self.gives_double_check(color) {
                flags.set_double_check(color);
            }
        }
    }
}

/// Moves plus check observations from one generation pass.
#[derive(Debug, Clone, Default)]
pub struct SlidingMoveReport {
    pub moves: Vec<Move>,
    pub checks: CheckReport,
}

/// Generate pseudo-legal sliding moves for the side to move.
///
/// Queens walk both direction sets; rooks and bishops one each. The
/// `policy` decides whether a double-checked mover is skipped (default) or
/// is the only mover generated for (legacy behavior).
pub fn generate_sliding_moves(
    board: &PlaneBoard,
    flags: &GameFlags,
    policy: DoubleCheckPolicy,
) -> ChessResult<SlidingMoveReport> {
    let side = flags.side_to_move;
    let mut report = SlidingMoveReport::default();

    let in_double_check = flags.checks.in_double_check(side);
    let gated_out = match policy {
        DoubleCheckPolicy::SuppressWhenDoubleChecked => in_double_check,
        DoubleCheckPolicy::LegacyOnlyWhenDoubleChecked => !in_double_check,
    };
    if gated_out {
        return Ok(report);
    }

    generate_rook_moves(board, side, &mut report)?;
    generate_bishop_moves(board, side, &mut report)?;
    generate_queen_moves(board, side, &mut report)?;

    trace!(
        "generated {} sliding moves for {:?}",
        report.moves.len(),
        side
    );

    Ok(report)
}

fn generate_rook_moves(
    board: &PlaneBoard,
    side: Color,
    report: &mut SlidingMoveReport,
) -> ChessResult<()> {
    let mover = Piece::new(PieceKind::Rook, side);

    let mut origins = board.plane_bits(mover);
    while origins != 0 {
        let origin = Square::from_index(origins.trailing_zeros() as u8);
        let checks = walk_rays(board, origin, mover, &LATERAL_DIRECTIONS, &mut report.moves)?;
        report.checks.record(side.opposite(), checks);
        origins &= origins - 1;
    }

    Ok(())
}

fn generate_bishop_moves(
    board: &PlaneBoard,
    side: Color,
    report: &mut SlidingMoveReport,
) -> ChessResult<()> {
    let mover = Piece::new(PieceKind::Bishop, side);

    let mut origins = board.plane_bits(mover);
    while origins != 0 {
        let origin = Square::from_index(origins.trailing_zeros() as u8);
        let checks = walk_rays(board, origin, mover, &DIAGONAL_DIRECTIONS, &mut report.moves)?;
        report.checks.record(side.opposite(), checks);
        origins &= origins - 1;
    }

    Ok(())
}

fn generate_queen_moves(
    board: &PlaneBoard,
    side: Color,
    report: &mut SlidingMoveReport,
) -> ChessResult<()> {
    let mover = Piece::new(PieceKind::Queen, side);

    let mut origins = board.plane_bits(mover);
    while origins != 0 {
        let origin = Square::from_index(origins.trailing_zeros() as u8);
        let lateral = walk_rays(board, origin, mover, &LATERAL_DIRECTIONS, &mut report.moves)?;
        let diagonal = walk_rays(board, origin, mover, &DIAGONAL_DIRECTIONS, &mut report.moves)?;
        report
            .checks
            .record(side.opposite(), lateral.saturating_add(diagonal));
        origins &= origins - 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{generate_sliding_moves, DoubleCheckPolicy};
    use crate::board::chess_types::{Color, Piece, PieceKind, Square};
    use crate::board::game_flags::GameFlags;
    use crate::errors::ChessError;
    use crate::utils::fen_parser::parse_fen;

    fn square(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test coordinates should be in range")
    }

    fn default_flags_for(side: Color) -> GameFlags {
        GameFlags { side_to_move: side, ..GameFlags::default() }
    }

    #[test]
    fn lone_rook_on_d4_has_fourteen_moves() {
        let (board, flags) =
            parse_fen("8/8/8/8/3R4/8/8/8 w - - 0 1").expect("FEN should parse");
        let report =
            generate_sliding_moves(&board, &flags, DoubleCheckPolicy::SuppressWhenDoubleChecked)
                .expect("generation should succeed");

        assert_eq!(report.moves.len(), 14);
        assert!(report
            .moves
            .iter()
            .all(|mv| mv.from == square(4, 3) && mv.piece.kind == PieceKind::Rook));
        assert!(!report.checks.gives_check(Color::Black));
    }

    #[test]
    fn lone_queen_on_d4_has_twenty_seven_moves() {
        let (board, flags) =
            parse_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1").expect("FEN should parse");
        let report = generate_sliding_moves(&board, &flags, DoubleCheckPolicy::default())
            .expect("generation should succeed");

        assert_eq!(report.moves.len(), 27);
    }

    #[test]
    fn generation_only_covers_the_side_to_move() {
        let (board, flags) =
            parse_fen("3r4/8/8/8/3R4/8/8/8 b - - 0 1").expect("FEN should parse");
        let report = generate_sliding_moves(&board, &flags, DoubleCheckPolicy::default())
            .expect("generation should succeed");

        assert!(!report.moves.is_empty());
        assert!(report.moves.iter().all(|mv| mv.piece.color == Color::Black));
    }

    #[test]
    fn rook_attacking_the_enemy_king_reports_check() {
        let (board, flags) =
            parse_fen("3k4/8/8/8/3R4/8/8/8 w - - 0 1").expect("FEN should parse");
        let report = generate_sliding_moves(&board, &flags, DoubleCheckPolicy::default())
            .expect("generation should succeed");

        assert!(report.checks.gives_check(Color::Black));
        assert!(!report.checks.gives_double_check(Color::Black));
        assert!(!report.checks.gives_check(Color::White));
        // The ray stops on the king square; nothing is emitted past it.
        let king_captures = report
            .moves
            .iter()
            .filter(|mv| mv.to == square(0, 3))
            .count();
        assert_eq!(king_captures, 1);
        assert_eq!(report.moves.len(), 14);
    }

    #[test]
    fn rook_and_queen_together_report_double_check() {
        // Rook on d4 and queen on a8 both attack the king on d8.
        let (board, flags) =
            parse_fen("Q2k4/8/8/8/3R4/8/8/8 w - - 0 1").expect("FEN should parse");
        let report = generate_sliding_moves(&board, &flags, DoubleCheckPolicy::default())
            .expect("generation should succeed");

        assert!(report.checks.gives_double_check(Color::Black));
    }

    #[test]
    fn default_policy_suppresses_moves_while_double_checked() {
        let (board, mut flags) =
            parse_fen("8/8/8/8/3R4/8/8/8 w - - 0 1").expect("FEN should parse");
        flags.checks.set_double_check(Color::White);

        let report =
            generate_sliding_moves(&board, &flags, DoubleCheckPolicy::SuppressWhenDoubleChecked)
                .expect("generation should succeed");
        assert!(report.moves.is_empty());
    }

    #[test]
    fn legacy_policy_requires_the_double_check_flag() {
        let (board, mut flags) =
            parse_fen("8/8/8/8/3R4/8/8/8 w - - 0 1").expect("FEN should parse");

        let gated =
            generate_sliding_moves(&board, &flags, DoubleCheckPolicy::LegacyOnlyWhenDoubleChecked)
                .expect("generation should succeed");
        assert!(gated.moves.is_empty());

        flags.checks.set_double_check(Color::White);
        let open =
            generate_sliding_moves(&board, &flags, DoubleCheckPolicy::LegacyOnlyWhenDoubleChecked)
                .expect("generation should succeed");
        assert_eq!(open.moves.len(), 14);
    }

    #[test]
    fn folded_report_sets_stored_flags() {
        let (board, mut flags) =
            parse_fen("3k4/8/8/8/3R4/8/8/8 w - - 0 1").expect("FEN should parse");
        let report = generate_sliding_moves(&board, &flags, DoubleCheckPolicy::default())
            .expect("generation should succeed");

        report.checks.fold_into(&mut flags.checks);
        assert!(flags.checks.in_check(Color::Black));
        assert!(!flags.checks.in_double_check(Color::Black));
        assert!(!flags.checks.in_check(Color::White));
    }

    #[test]
    fn stacked_square_fails_generation_fast() {
        let mut board = crate::board::plane_board::PlaneBoard::new();
        let target = square(4, 6);
        board.set(square(4, 3), Piece::new(PieceKind::Rook, Color::White));
        board.set(target, Piece::new(PieceKind::Pawn, Color::Black));
        board.set(target, Piece::new(PieceKind::Knight, Color::Black));

        let flags = default_flags_for(Color::White);
        let outcome = generate_sliding_moves(&board, &flags, DoubleCheckPolicy::default());
        assert_eq!(outcome.unwrap_err(), ChessError::InvalidState { square: target });
    }
}
