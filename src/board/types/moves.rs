//! Move record types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Which side of the board a castling move goes to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleWing {
    /// Toward the h-file rook; the king ends on the g-file
    Kingside,
    /// Toward the a-file rook; the king ends on the c-file
    Queenside,
}

impl CastleWing {
    pub const BOTH: [CastleWing; 2] = [CastleWing::Kingside, CastleWing::Queenside];

    /// Column of the rook that castles on this wing
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> i8 {
        match self {
            CastleWing::Kingside => 7,
            CastleWing::Queenside => 0,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> i8 {
        match self {
            CastleWing::Kingside => 6,
            CastleWing::Queenside => 2,
        }
    }

    /// Column the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> i8 {
        match self {
            CastleWing::Kingside => 5,
            CastleWing::Queenside => 3,
        }
    }

    /// Wing implied by a king move that ends on `to_col`
    #[inline]
    #[must_use]
    pub const fn from_king_target(to_col: i8) -> Self {
        if to_col > 4 {
            CastleWing::Kingside
        } else {
            CastleWing::Queenside
        }
    }
}

/// Snapshot of an executed move.
///
/// All piece values are copies taken at the time of the move; a `Move` never
/// refers back into a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// A plain move with no capture or special flags
    #[must_use]
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            is_en_passant: false,
            is_castling: false,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this was a pawn advancing two rows
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.to.row().abs_diff(self.from.row()) == 2
    }

    /// Coordinate notation such as `e2e4` or `a7a8q`
    #[must_use]
    pub fn to_coordinate(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promotion {
            s.push(kind.to_char());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_coordinate_notation() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let mut mv = Move::quiet(Square(6, 4), Square(4, 4), pawn);
        assert_eq!(mv.to_string(), "e2e4");
        assert!(mv.is_double_pawn_push());

        mv.from = Square(1, 0);
        mv.to = Square(0, 0);
        mv.promotion = Some(PieceKind::Queen);
        assert_eq!(mv.to_string(), "a7a8q");
        assert!(!mv.is_double_pawn_push());
    }

    #[test]
    fn test_double_push_with_extreme_rows() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let mv = Move::quiet(Square(i8::MIN, 0), Square(i8::MAX, 0), pawn);
        assert!(!mv.is_double_pawn_push());
    }

    #[test]
    fn test_castle_wing_geometry() {
        assert_eq!(CastleWing::from_king_target(6), CastleWing::Kingside);
        assert_eq!(CastleWing::from_king_target(2), CastleWing::Queenside);
        assert_eq!(CastleWing::Kingside.rook_target_col(), 5);
        assert_eq!(CastleWing::Queenside.rook_target_col(), 3);
    }
}
