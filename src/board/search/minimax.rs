use super::{SearchStats, DRAW_SCORE, INFINITY};
use crate::board::{Board, Color, Move, PieceKind};

/// State shared by every node of one search
pub(super) struct MinimaxContext {
    root_side: Color,
    promotion: PieceKind,
    pub(super) stats: SearchStats,
}

impl MinimaxContext {
    pub(super) fn new(root_side: Color, promotion: PieceKind) -> Self {
        MinimaxContext {
            root_side,
            promotion,
            stats: SearchStats::default(),
        }
    }

    /// Alpha-beta minimax. Scores are always from `root_side`'s point of view;
    /// `maximizing` tells whether `root_side` is to move on `board`.
    pub(super) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        last_move: Option<&Move>,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return board.evaluate(self.root_side);
        }

        let to_move = if maximizing {
            self.root_side
        } else {
            self.root_side.opponent()
        };
        let moves = board.legal_moves_promoting_to(to_move, last_move, self.promotion);

        // No legal move: checkmate if in check, otherwise stalemate
        if moves.is_empty() {
            if !board.is_in_check(to_move) {
                return DRAW_SCORE;
            }
            return if maximizing { -INFINITY } else { INFINITY };
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in &moves {
                let child = board.apply_move(mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, false, Some(mv));
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let child = board.apply_move(mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, true, Some(mv));
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}
