use super::super::{Board, Square};

impl Board {
    pub(crate) fn bishop_move_ok(&self, from: Square, to: Square) -> bool {
        let d_row = (to.row() - from.row()).abs();
        let d_col = (to.col() - from.col()).abs();
        d_row == d_col && d_row > 0 && self.is_path_clear(from, to)
    }

    pub(crate) fn rook_move_ok(&self, from: Square, to: Square) -> bool {
        let d_row = to.row() - from.row();
        let d_col = to.col() - from.col();
        (d_row == 0) != (d_col == 0) && self.is_path_clear(from, to)
    }

    pub(crate) fn queen_move_ok(&self, from: Square, to: Square) -> bool {
        self.rook_move_ok(from, to) || self.bishop_move_ok(from, to)
    }
}
