//! Core board-model types: colors, piece kinds, plane indexing, squares,
//! and moves.
//!
//! Piece placement is stored as twelve boolean planes, one per (kind, color)
//! combination. The plane order below is load-bearing: it fixes the FEN
//! character mapping and the parity rule (even plane index = white, odd =
//! black) that move generation relies on.

use std::fmt;

/// Number of piece planes: six kinds for each of two colors.
pub const PLANE_COUNT: usize = 12;

/// Plane index to FEN character, immutable and shared by all boards.
/// Even planes are white (uppercase), odd planes are black.
pub const PLANE_TO_FEN: [char; PLANE_COUNT] = [
    'P', 'p', 'R', 'r', 'N', 'n', 'B', 'b', 'Q', 'q', 'K', 'k',
];

/// Side of a piece or the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Plane parity for this color: 0 for white, 1 for black.
    #[inline]
    pub const fn parity(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind. The declaration order fixes each kind's plane pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// First plane index of this kind's (white, black) plane pair.
    #[inline]
    pub const fn plane_base(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 2,
            PieceKind::Knight => 4,
            PieceKind::Bishop => 6,
            PieceKind::Queen => 8,
            PieceKind::King => 10,
        }
    }
}

/// A colored piece, addressable as a single plane index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Plane index of this piece: kind base plus color parity.
    #[inline]
    pub const fn plane(self) -> usize {
        self.kind.plane_base() + self.color.parity()
    }

    /// Inverse of [`Piece::plane`].
    pub const fn from_plane(plane: usize) -> Option<Piece> {
        let color = if plane % 2 == 0 { Color::White } else { Color::Black };
        let kind = match plane / 2 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Rook,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Queen,
            5 => PieceKind::King,
            _ => return None,
        };
        Some(Piece { kind, color })
    }

    /// FEN character for this piece (uppercase white, lowercase black).
    #[inline]
    pub const fn fen_char(self) -> char {
        PLANE_TO_FEN[self.plane()]
    }

    /// Inverse of [`Piece::fen_char`].
    pub const fn from_fen_char(symbol: char) -> Option<Piece> {
        let mut plane = 0;
        while plane < PLANE_COUNT {
            if PLANE_TO_FEN[plane] == symbol {
                return Piece::from_plane(plane);
            }
            plane += 1;
        }
        None
    }
}

/// A board square as a (row, column) pair, each in `0..=7`.
///
/// Row 0 is the FEN-first rank (rank 8, black's back rank); this orientation
/// must not change or FEN round-trips break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, rejecting out-of-range coordinates.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Build a square from coordinates the caller has already bounds-checked
    /// (loop indices over `0..8`). Coordinates are masked into range.
    #[inline]
    pub(crate) const fn from_parts(row: u8, col: u8) -> Square {
        Square { row: row & 7, col: col & 7 }
    }

    /// Build a square from a plane bit index (`row * 8 + col`).
    #[inline]
    pub const fn from_index(index: u8) -> Square {
        Square::from_parts(index / 8, index % 8)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Bit for this square within a packed plane.
    #[inline]
    pub const fn plane_bit(self) -> u64 {
        1u64 << (self.row * 8 + self.col)
    }

    /// Square reached by stepping `steps` times along `(d_row, d_col)`, or
    /// `None` when that leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8, steps: u8) -> Option<Square> {
        let row = i16::from(self.row) + i16::from(d_row) * i16::from(steps);
        let col = i16::from(self.col) + i16::from(d_col) * i16::from(steps);
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::algebraic::square_to_algebraic(*self))
    }
}

/// A pseudo-legal move: origin, target, and the piece being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
