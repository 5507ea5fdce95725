use super::super::{Board, Color, Square};

impl Board {
    /// Single step onto an empty square, double step from the start rank
    /// through two empty squares, or a diagonal capture of an enemy piece.
    /// En passant is not handled here.
    pub(crate) fn pawn_move_ok(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let d_row = to.row() - from.row();
        let d_col = to.col() - from.col();

        if d_col == 0 {
            if d_row == dir {
                return self.is_empty(to);
            }
            if d_row == 2 * dir && from.row() == color.pawn_start_rank() {
                return self.is_empty(from.offset(dir, 0)) && self.is_empty(to);
            }
            return false;
        }

        d_col.abs() == 1 && d_row == dir && self.is_enemy(to, color)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

    #[test]
    fn test_white_pawn_steps_toward_row_zero() {
        let board = Board::new();
        assert!(board.is_structurally_legal(Square(6, 4), Square(5, 4)));
        assert!(board.is_structurally_legal(Square(6, 4), Square(4, 4)));
        assert!(!board.is_structurally_legal(Square(6, 4), Square(7, 4)));
        assert!(!board.is_structurally_legal(Square(6, 4), Square(3, 4)));
    }

    #[test]
    fn test_black_pawn_steps_toward_row_seven() {
        let board = Board::new();
        assert!(board.is_structurally_legal(Square(1, 3), Square(2, 3)));
        assert!(board.is_structurally_legal(Square(1, 3), Square(3, 3)));
        assert!(!board.is_structurally_legal(Square(1, 3), Square(0, 3)));
    }

    #[test]
    fn test_double_step_only_from_start_rank() {
        let board = BoardBuilder::new()
            .piece(Square(5, 2), Color::White, PieceKind::Pawn)
            .build();
        assert!(board.is_structurally_legal(Square(5, 2), Square(4, 2)));
        assert!(!board.is_structurally_legal(Square(5, 2), Square(3, 2)));
    }

    #[test]
    fn test_blocked_pawn() {
        let board = BoardBuilder::new()
            .piece(Square(6, 4), Color::White, PieceKind::Pawn)
            .piece(Square(5, 4), Color::Black, PieceKind::Knight)
            .piece(Square(4, 0), Color::Black, PieceKind::Knight)
            .piece(Square(6, 0), Color::White, PieceKind::Pawn)
            .build();
        // No forward capture, no jumping over a blocker
        assert!(!board.is_structurally_legal(Square(6, 4), Square(5, 4)));
        assert!(!board.is_structurally_legal(Square(6, 4), Square(4, 4)));
        // Double step onto an occupied square
        assert!(!board.is_structurally_legal(Square(6, 0), Square(4, 0)));
        assert!(board.is_structurally_legal(Square(6, 0), Square(5, 0)));
    }

    #[test]
    fn test_diagonal_requires_enemy() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, PieceKind::Pawn)
            .piece(Square(3, 5), Color::Black, PieceKind::Pawn)
            .build();
        assert!(board.is_structurally_legal(Square(4, 4), Square(3, 5)));
        assert!(!board.is_structurally_legal(Square(4, 4), Square(3, 3)));
        // Backward diagonal capture is never allowed
        assert!(!board.is_structurally_legal(Square(3, 5), Square(2, 4)));
        assert!(board.is_structurally_legal(Square(3, 5), Square(4, 4)));
    }
}
