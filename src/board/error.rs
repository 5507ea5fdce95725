//! Error types for board operations.

use std::fmt;

use super::{PieceKind, Square};

/// Error type for `make_move` contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square holds no piece (the caller skipped legality checks)
    NoPieceAtSource { from: Square },
    /// The destination lies off the board
    DestinationOffBoard { to: Square },
    /// Pawns may only promote to queen, rook, bishop or knight
    InvalidPromotion { kind: PieceKind },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource { from } => {
                write!(f, "No piece at source square {from}")
            }
            MoveError::DestinationOffBoard { to } => {
                write!(f, "Destination {to} is off the board")
            }
            MoveError::InvalidPromotion { kind } => {
                write!(f, "Cannot promote a pawn to a {kind}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfBounds { row: i8, col: i8 },
    /// Invalid coordinate notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must have exactly 8 ranks separated by '/'
    WrongRankCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            PlacementError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
