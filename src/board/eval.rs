use super::pst::positional_bonus;
use super::{Board, Color};

impl Board {
    /// Static material + placement score from `perspective`'s point of view.
    ///
    /// Each piece contributes its material value plus its piece-square bonus,
    /// positive for `perspective`'s pieces and negative for the opponent's.
    /// Whose turn it is plays no part.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.pieces()
            .map(|(sq, piece)| {
                let score = piece.kind.value() + positional_bonus(piece.kind, piece.color, sq);
                if piece.color == perspective {
                    score
                } else {
                    -score
                }
            })
            .sum()
    }
}
