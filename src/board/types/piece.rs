//! Piece, piece kind and color types.

use std::fmt;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, queen first
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Parse a piece kind from a character (p, n, b, r, q, k), ignoring case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Get the material value in centipawns.
    ///
    /// Pawn=100, Knight=320, Bishop=330, Rook=500, Queen=900, King=20000.
    /// The king value only has to dwarf everything else combined.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    /// Returns true if a pawn may promote to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Chess colors. White starts on row 7 and moves toward row 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, white first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank row for this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Pawn forward row direction (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Pawn starting row (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> i8 {
        self.opponent().back_rank()
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board.
///
/// `has_moved` is set by the rules engine whenever the piece completes a move
/// and gates castling.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Copy of this piece with `has_moved` set
    #[inline]
    #[must_use]
    pub const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Placement character: uppercase for White, lowercase for Black
    #[must_use]
    pub fn to_placement_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}
