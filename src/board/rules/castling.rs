use super::super::{Board, CastleWing, Color, PieceKind, Square};

/// Column both kings start on
const KING_HOME_COL: i8 = 4;

impl Board {
    /// Whether `color` may castle on `wing` right now.
    ///
    /// King and rook must stand unmoved on their home squares with nothing
    /// between them, the king must not be in check, and no square the king
    /// crosses or lands on may be attacked. The rook's landing square is
    /// not checked.
    #[must_use]
    pub fn can_castle(&self, color: Color, wing: CastleWing) -> bool {
        let row = color.back_rank();
        let king_sq = Square(row, KING_HOME_COL);
        let rook_sq = Square(row, wing.rook_col());

        let unmoved = |sq: Square, kind: PieceKind| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(kind, color) && !p.has_moved)
        };
        if !unmoved(king_sq, PieceKind::King) || !unmoved(rook_sq, PieceKind::Rook) {
            return false;
        }

        let (lo, hi) = if wing.rook_col() < KING_HOME_COL {
            (wing.rook_col() + 1, KING_HOME_COL)
        } else {
            (KING_HOME_COL + 1, wing.rook_col())
        };
        if !(lo..hi).all(|col| self.is_empty(Square(row, col))) {
            return false;
        }

        if self.is_in_check(color) {
            return false;
        }

        let step = (wing.king_target_col() - KING_HOME_COL).signum();
        (1..=2).all(|n| {
            let through = Square(row, KING_HOME_COL + step * n);
            !self.with_raw_move(king_sq, through).is_in_check(color)
        })
    }

    /// King destinations for every wing `color` can castle on, kingside first.
    pub(crate) fn castle_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        if from != Square(color.back_rank(), KING_HOME_COL) {
            return Vec::new();
        }
        CastleWing::BOTH
            .into_iter()
            .filter(|&wing| self.can_castle(color, wing))
            .map(|wing| Square(from.row(), wing.king_target_col()))
            .collect()
    }
}
