//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Features:
//! - Full-width search to a fixed depth, no quiescence or extensions
//! - Checkmate scored as +/- infinity, stalemate as a draw (0)
//! - Static material + piece-square evaluation at the leaves
//! - Deterministic move order: pieces row-major, destinations as returned
//!   by `Board::legal_moves`; the first move reaching the best score wins
//!
//! The search is synchronous and keeps no state between calls. Use
//! [`crate::engine::SearchJob`] to run it off the calling thread.

mod minimax;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, PieceKind};
use minimax::MinimaxContext;

/// Score bound used as +/- infinity; also the checkmate score
pub const INFINITY: i32 = i32::MAX;

/// Score of a stalemated node
pub const DRAW_SCORE: i32 = 0;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Per-call search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies to search; 0 is treated as 1
    pub depth: u32,
    /// Piece a promoting pawn becomes in candidate moves. A king or pawn
    /// here is searched as a queen.
    pub promotion: PieceKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            promotion: PieceKind::Queen,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = kind;
        self
    }
}

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root
    pub nodes: u64,
    /// Nodes scored by static evaluation at depth 0
    pub leaves: u64,
    /// Sibling lists cut short by alpha-beta
    pub cutoffs: u64,
}

/// Outcome of a top-level search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching side's point of view
    pub score: i32,
    pub stats: SearchStats,
}

/// Pick a move for `side` by searching `depth` plies.
///
/// Returns `None` if `side` has no legal move; whether that is checkmate or
/// stalemate is for the caller to decide with `Board::is_in_check`.
#[must_use]
pub fn calculate_best_move(board: &Board, side: Color, depth: u32) -> Option<Move> {
    run_search(board, side, &SearchConfig::with_depth(depth), None).best_move
}

/// Search `board` for `side` with an explicit configuration.
///
/// `last_move` is the move that produced `board`, needed for en passant
/// candidates at the root.
#[must_use]
pub fn run_search(
    board: &Board,
    side: Color,
    config: &SearchConfig,
    last_move: Option<&Move>,
) -> SearchResult {
    let depth = config.depth.max(1);
    if !config.promotion.is_promotion_target() {
        log::warn!(
            "cannot promote to a {}, searching queen promotions",
            config.promotion
        );
    }
    let mut ctx = MinimaxContext::new(side, config.promotion);
    let mut best: Option<(Move, i32)> = None;

    for mv in board.legal_moves_promoting_to(side, last_move, config.promotion) {
        let child = board.apply_move(&mv);
        let score = ctx.minimax(&child, depth - 1, -INFINITY, INFINITY, false, Some(&mv));
        log::trace!("root {mv}: {score}");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let result = SearchResult {
        best_move: best.map(|(mv, _)| mv),
        score: best.map_or(DRAW_SCORE, |(_, score)| score),
        stats: ctx.stats,
    };
    log::debug!(
        "search {side} depth {depth}: best {} score {} nodes {} cutoffs {}",
        result
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        result.score,
        result.stats.nodes,
        result.stats.cutoffs
    );
    result
}

/// Minimax value of `board` searched `depth` plies, scored for `root_side`.
///
/// `maximizing` is true when `root_side` is to move on `board`. Promotions
/// go to a queen and en passant is only considered below this node.
#[must_use]
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    root_side: Color,
) -> i32 {
    MinimaxContext::new(root_side, PieceKind::Queen).minimax(
        board, depth, alpha, beta, maximizing, None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Square};

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.promotion, PieceKind::Queen);
        assert_eq!(SearchConfig::with_depth(4).depth, 4);
    }

    #[test]
    fn test_back_rank_mate_in_one() {
        let board = Board::from_placement("6k1/5ppp/8/8/8/8/8/R5K1").unwrap();
        for depth in [2, 3] {
            let mv = calculate_best_move(&board, Color::White, depth).unwrap();
            assert_eq!((mv.from, mv.to), (Square(7, 0), Square(0, 0)));

            let outcome = board.make_move(mv.from, mv.to, None, None).unwrap();
            assert!(outcome.is_checkmate);
        }
    }

    #[test]
    fn test_mate_scores_infinity() {
        let board = Board::from_placement("6k1/5ppp/8/8/8/8/8/R5K1").unwrap();
        let result = run_search(&board, Color::White, &SearchConfig::with_depth(2), None);
        assert_eq!(result.score, INFINITY);
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn test_wins_hanging_queen() {
        let board = Board::from_placement("q3k3/8/8/8/8/8/8/R3K3").unwrap();
        let mv = calculate_best_move(&board, Color::White, 2).unwrap();
        assert_eq!((mv.from, mv.to), (Square(7, 0), Square(0, 0)));
        assert!(mv
            .captured
            .is_some_and(|p| p.kind == PieceKind::Queen));
    }

    #[test]
    fn test_no_move_when_mated_or_stalemated() {
        let mated = Board::from_placement("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
        assert!(mated.is_checkmate(Color::Black));
        assert_eq!(calculate_best_move(&mated, Color::Black, 2), None);

        let stalemated = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        assert!(stalemated.is_stalemate(Color::Black));
        let result = run_search(&stalemated, Color::Black, &SearchConfig::default(), None);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn test_depth_zero_minimax_is_static_eval() {
        let board = Board::from_placement("q3k3/8/8/8/8/8/8/R3K3").unwrap();
        assert_eq!(
            minimax(&board, 0, -INFINITY, INFINITY, true, Color::White),
            board.evaluate(Color::White)
        );
    }

    #[test]
    fn test_minimax_terminal_nodes() {
        let mated = Board::from_placement("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
        // Black to move and mated: catastrophic for Black, great for White
        assert_eq!(
            minimax(&mated, 2, -INFINITY, INFINITY, true, Color::Black),
            -INFINITY
        );
        assert_eq!(
            minimax(&mated, 2, -INFINITY, INFINITY, false, Color::White),
            INFINITY
        );

        let stalemated = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        assert_eq!(
            minimax(&stalemated, 3, -INFINITY, INFINITY, false, Color::White),
            DRAW_SCORE
        );
    }

    #[test]
    fn test_configured_promotion_kind() {
        let board = BoardBuilder::new()
            .piece(Square(7, 7), Color::White, PieceKind::King)
            .piece(Square(4, 7), Color::Black, PieceKind::King)
            .moved_piece(Square(1, 0), Color::White, PieceKind::Pawn)
            .build();
        let config = SearchConfig::with_depth(2).promotion(PieceKind::Knight);
        let result = run_search(&board, Color::White, &config, None);
        let mv = result.best_move.unwrap();
        assert_eq!((mv.from, mv.to), (Square(1, 0), Square(0, 0)));
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn test_invalid_promotion_kind_keeps_promoting_moves() {
        // Promoting is White's only legal move
        let board = Board::from_placement("8/P7/8/8/8/6q1/8/k6K").unwrap();
        assert_eq!(board.all_legal_moves(Color::White, None).len(), 1);

        for kind in [PieceKind::Pawn, PieceKind::King] {
            let config = SearchConfig::with_depth(2).promotion(kind);
            let result = run_search(&board, Color::White, &config, None);
            let mv = result.best_move.unwrap();
            assert_eq!((mv.from, mv.to), (Square(1, 0), Square(0, 0)));
            assert_eq!(mv.promotion, Some(PieceKind::Queen));
            assert_ne!(result.score, DRAW_SCORE);
        }

        let open = Board::from_placement("8/P7/8/8/8/8/8/k6K").unwrap();
        let candidates = open.legal_moves_promoting_to(Color::White, None, PieceKind::King);
        assert_eq!(candidates, open.all_legal_moves(Color::White, None));
    }

    /// Minimax without pruning, for checking alpha-beta against
    fn full_width(board: &Board, depth: u32, maximizing: bool, root_side: Color) -> i32 {
        if depth == 0 {
            return board.evaluate(root_side);
        }
        let to_move = if maximizing {
            root_side
        } else {
            root_side.opponent()
        };
        let moves = board.all_legal_moves(to_move, None);
        if moves.is_empty() {
            return match (board.is_in_check(to_move), maximizing) {
                (false, _) => DRAW_SCORE,
                (true, true) => -INFINITY,
                (true, false) => INFINITY,
            };
        }
        let scores = moves
            .iter()
            .map(|mv| full_width(&board.apply_move(mv), depth - 1, !maximizing, root_side));
        if maximizing {
            scores.max().unwrap_or(-INFINITY)
        } else {
            scores.min().unwrap_or(INFINITY)
        }
    }

    #[test]
    fn test_pruning_preserves_minimax_value() {
        let middlegame =
            Board::from_placement("r3k2r/pp3ppp/2n1bn2/3pp3/4P3/2NP1N2/PPP2PPP/R1B1KB1R").unwrap();
        for side in Color::BOTH {
            assert_eq!(
                minimax(&middlegame, 2, -INFINITY, INFINITY, true, side),
                full_width(&middlegame, 2, true, side)
            );
        }

        let endgame = Board::from_placement("8/5k2/3p4/2pP4/2P2K2/8/5R2/8").unwrap();
        for side in Color::BOTH {
            assert_eq!(
                minimax(&endgame, 3, -INFINITY, INFINITY, true, side),
                full_width(&endgame, 3, true, side)
            );
        }
    }

    #[test]
    fn test_zero_depth_still_picks_a_move() {
        let board = Board::new();
        assert!(calculate_best_move(&board, Color::White, 0).is_some());
    }
}
