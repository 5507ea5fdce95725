//! Structural move legality.
//!
//! Answers whether a single (from, to) pair follows the movement geometry of
//! the piece standing on `from`, with sliding paths unobstructed. Check,
//! castling and en passant are the rules engine's business, not this module's.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, PieceKind, Square};

impl Board {
    /// Whether moving the piece on `from` to `to` is geometrically legal,
    /// ignoring whether it leaves the mover's king in check.
    ///
    /// Out-of-range squares, an empty source and a destination holding an
    /// own piece are all illegal.
    #[must_use]
    pub fn is_structurally_legal(&self, from: Square, to: Square) -> bool {
        if !from.is_in_bounds() || !to.is_in_bounds() {
            return false;
        }
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if self.is_own(to, piece.color) {
            return false;
        }

        match piece.kind {
            PieceKind::Pawn => self.pawn_move_ok(from, to, piece.color),
            PieceKind::Knight => Self::knight_move_ok(from, to),
            PieceKind::Bishop => self.bishop_move_ok(from, to),
            PieceKind::Rook => self.rook_move_ok(from, to),
            PieceKind::Queen => self.queen_move_ok(from, to),
            PieceKind::King => Self::king_move_ok(from, to),
        }
    }

    /// All squares strictly between `from` and `to` along their unit step
    /// are empty.
    pub(crate) fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let step_row = (to.row() - from.row()).signum();
        let step_col = (to.col() - from.col()).signum();

        let mut current = from.offset(step_row, step_col);
        while current != to {
            if !current.is_in_bounds() || self.piece_at(current).is_some() {
                return false;
            }
            current = current.offset(step_row, step_col);
        }
        true
    }
}
