use super::super::{Board, Square};

impl Board {
    pub(crate) fn knight_move_ok(from: Square, to: Square) -> bool {
        let d_row = (to.row() - from.row()).abs();
        let d_col = (to.col() - from.col()).abs();
        matches!((d_row, d_col), (2, 1) | (1, 2))
    }
}
