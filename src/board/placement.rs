//! Piece-placement text: the first field of a FEN record.
//!
//! The first rank in the text is row 0 (Black's back rank). Pieces parsed
//! from placement text have `has_moved` cleared.

use std::fmt;
use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Parse a board from piece-placement text such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        let field = text.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut files = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    // Empty runs are 1 to 8 squares long
                    if !(1..=8).contains(&skip) {
                        return Err(PlacementError::InvalidPiece { char: c });
                    }
                    files += skip as usize;
                } else {
                    let kind =
                        PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if files >= 8 {
                        return Err(PlacementError::TooManyFiles {
                            rank: row,
                            files: files + 1,
                        });
                    }
                    board.set_piece(Square(row as i8, files as i8), Piece::new(kind, color));
                    files += 1;
                }
            }
            if files > 8 {
                return Err(PlacementError::TooManyFiles { rank: row, files });
            }
            if files < 8 {
                return Err(PlacementError::TooFewFiles { rank: row, files });
            }
        }

        Ok(board)
    }

    /// Serialize the board to piece-placement text.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_placement_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = self
                    .piece_at(Square(row, col))
                    .map_or('.', Piece::to_placement_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
