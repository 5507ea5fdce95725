pub mod board;
pub mod engine;

pub use board::{
    calculate_best_move, Board, Color, Move, MoveError, MoveOutcome, Piece, PieceKind, Square,
};
pub use engine::SearchJob;
