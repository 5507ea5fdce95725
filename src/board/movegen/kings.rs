use super::super::{Board, Square};

impl Board {
    /// One square in any direction. Castling is generated by the rules engine.
    pub(crate) fn king_move_ok(from: Square, to: Square) -> bool {
        let d_row = (to.row() - from.row()).abs();
        let d_col = (to.col() - from.col()).abs();
        d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
    }
}
