//! Chess board representation and game logic.
//!
//! Uses a plain 8x8 grid of optional pieces. Every rule operation takes a
//! board by reference and returns a new one, so a `Board` can be shared
//! freely between independent searches.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_core::board::{calculate_best_move, Board, Color, Square};
//!
//! let board = Board::new();
//! let pawn_moves = board.legal_moves(Square(6, 4), None);
//! assert_eq!(pawn_moves, vec![Square(5, 4), Square(4, 4)]);
//!
//! let reply = calculate_best_move(&board, Color::White, 2);
//! assert!(reply.is_some());
//! ```

mod builder;
mod error;
mod eval;
mod make_move;
mod movegen;
mod placement;
mod pst;
mod rules;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, PlacementError, SquareError};
pub use make_move::MoveOutcome;
pub use rules::GameStatus;
pub use state::Board;
pub use types::{CastleWing, Color, Move, Piece, PieceKind, Square};

// Public API - search functions and configuration
pub use search::{
    calculate_best_move, minimax, run_search, SearchConfig, SearchResult, SearchStats, DEFAULT_DEPTH,
    DRAW_SCORE, INFINITY,
};
