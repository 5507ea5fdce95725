//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing placement text.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(Color::White), 2);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.with(square, Piece::new(kind, color))
    }

    /// Place a piece that counts as having moved (no castling with it).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.with(square, Piece::new(kind, color).moved())
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    fn with(mut self, square: Square, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Build the board. Off-board squares are dropped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board
    }
}
