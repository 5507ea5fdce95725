use super::super::{Board, Move, PieceKind, Square};

impl Board {
    /// Whether the pawn on `from` may capture en passant by moving to `to`.
    ///
    /// `last_move` must be an enemy pawn's two-row advance that landed beside
    /// `from` on the same row; `to` is the square that pawn passed over.
    #[must_use]
    pub fn can_en_passant(&self, from: Square, to: Square, last_move: Option<&Move>) -> bool {
        let (Some(last), Some(pawn)) = (last_move, self.piece_at(from)) else {
            return false;
        };
        if pawn.kind != PieceKind::Pawn || !last.is_double_pawn_push() {
            return false;
        }
        if last.to.row() != from.row() || last.to.col().abs_diff(from.col()) != 1 {
            return false;
        }
        let victim_in_place = self
            .piece_at(last.to)
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != pawn.color);

        victim_in_place && to == Square(from.row() + pawn.color.pawn_direction(), last.to.col())
    }

    /// The en passant destination for the pawn on `from`, if `last_move`
    /// enables one and taking it does not expose the pawn's own king.
    pub(crate) fn en_passant_destination(
        &self,
        from: Square,
        last_move: Option<&Move>,
    ) -> Option<Square> {
        let last = last_move?;
        let pawn = self.piece_at(from)?;
        let to = Square(from.row() + pawn.color.pawn_direction(), last.to.col());
        if !self.can_en_passant(from, to, last_move) {
            return None;
        }

        let mut after = self.clone();
        after.take_piece(last.to);
        after.apply_raw_move(from, to);
        (!after.is_in_check(pawn.color)).then_some(to)
    }
}
