//! Rules engine: legal-move sets, check, checkmate and stalemate.
//!
//! Legal moves are structurally legal moves that do not leave the mover's
//! king attacked. Self-check is detected by playing the move on a cloned
//! board and asking whether the king is attacked there.

mod castling;
mod en_passant;

use super::{Board, Color, Move, PieceKind, Square};

/// Position label for the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Board {
    /// Legal destinations for the piece on `from`.
    ///
    /// Ordinary destinations come first in row-major order, followed by
    /// castling destinations (kingside, then queenside) and the en passant
    /// destination enabled by `last_move`. An empty source yields no moves.
    #[must_use]
    pub fn legal_moves(&self, from: Square, last_move: Option<&Move>) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut moves: Vec<Square> = Square::all()
            .filter(|&to| self.is_structurally_legal(from, to))
            .filter(|&to| !self.with_raw_move(from, to).is_in_check(piece.color))
            .collect();

        match piece.kind {
            PieceKind::King => moves.extend(self.castle_destinations(from, piece.color)),
            PieceKind::Pawn => moves.extend(self.en_passant_destination(from, last_move)),
            _ => {}
        }

        moves
    }

    /// Every legal move for `color`, pieces in row-major order and each
    /// piece's destinations in `legal_moves` order. Promotions go to a queen.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color, last_move: Option<&Move>) -> Vec<Move> {
        self.legal_moves_promoting_to(color, last_move, PieceKind::Queen)
    }

    pub(crate) fn legal_moves_promoting_to(
        &self,
        color: Color,
        last_move: Option<&Move>,
        promotion: PieceKind,
    ) -> Vec<Move> {
        // King and pawn are not promotion targets; search those as a queen
        let promotion = if promotion.is_promotion_target() {
            promotion
        } else {
            PieceKind::Queen
        };
        let mut moves = Vec::with_capacity(48);
        for from in self.piece_squares(color) {
            for to in self.legal_moves(from, last_move) {
                if let Ok(mv) = self.describe_move(from, to, last_move, Some(promotion)) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// True if `color` has at least one legal move.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color, last_move: Option<&Move>) -> bool {
        self.piece_squares(color)
            .into_iter()
            .any(|from| !self.legal_moves(from, last_move).is_empty())
    }

    /// True if some piece of color `by` could legally capture onto `sq`,
    /// ignoring self-check. Pawns only attack occupied squares here, so
    /// probe empty squares by placing a piece on them first.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.piece_squares(by)
            .into_iter()
            .any(|from| self.is_structurally_legal(from, sq))
    }

    /// True if `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// In check with no legal move. En passant escapes are not considered;
    /// see [`Board::is_checkmate_after`].
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_checkmate_after(color, None)
    }

    /// Not in check with no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.is_stalemate_after(color, None)
    }

    /// Checkmate test that also considers en passant replies to `last_move`.
    #[must_use]
    pub fn is_checkmate_after(&self, color: Color, last_move: Option<&Move>) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color, last_move)
    }

    /// Stalemate test that also considers en passant replies to `last_move`.
    #[must_use]
    pub fn is_stalemate_after(&self, color: Color, last_move: Option<&Move>) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color, last_move)
    }

    /// Classify the position for `color` as the side to move.
    #[must_use]
    pub fn game_status(&self, color: Color, last_move: Option<&Move>) -> GameStatus {
        let in_check = self.is_in_check(color);
        let can_move = self.has_any_legal_move(color, last_move);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Normal,
        }
    }
}
