//! Core chess types.
//!
//! This module contains the value types shared by the whole engine:
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - a (row, col) board coordinate
//! - `Move` and `CastleWing` - move records

mod moves;
mod piece;
mod square;

pub use moves::{CastleWing, Move};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
