use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// Boards are treated as immutable snapshots by the rules engine: every
/// operation that changes the position works on a clone. `Clone` is a deep
/// copy since pieces are plain values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard 32-piece starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            board.set_piece(Square(0, col), Piece::new(kind, Color::Black));
            board.set_piece(Square(1, col), Piece::new(PieceKind::Pawn, Color::Black));
            board.set_piece(Square(6, col), Piece::new(PieceKind::Pawn, Color::White));
            board.set_piece(Square(7, col), Piece::new(kind, Color::White));
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the piece on a square; off-board squares are empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_in_bounds() {
            return None;
        }
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Place a piece on a square (ignored for off-board squares).
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        if sq.is_in_bounds() {
            self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
        }
    }

    /// Remove and return the piece on a square.
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        if !sq.is_in_bounds() {
            return None;
        }
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Move whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// No rule knowledge: flags are left untouched.
    pub(crate) fn apply_raw_move(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.take_piece(from) {
            self.set_piece(to, piece);
        }
    }

    /// A clone of this board with `apply_raw_move` applied.
    #[must_use]
    pub(crate) fn with_raw_move(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        next.apply_raw_move(from, to);
        next
    }

    #[inline]
    #[must_use]
    pub fn is_in_bounds(sq: Square) -> bool {
        sq.is_in_bounds()
    }

    /// True for in-bounds squares with no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_in_bounds() && self.piece_at(sq).is_none()
    }

    /// True if the square holds a piece of the opposite color.
    #[inline]
    #[must_use]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color != color)
    }

    /// True if the square holds a piece of the given color.
    #[inline]
    #[must_use]
    pub fn is_own(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color == color)
    }

    /// Locate the king of the given color.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(PieceKind::King, color))
        })
    }

    /// Squares holding pieces of the given color, in row-major order.
    ///
    /// Move enumeration, and therefore search tie-breaking, depends on this order.
    #[must_use]
    pub fn piece_squares(&self, color: Color) -> Vec<Square> {
        Square::all().filter(|&sq| self.is_own(sq, color)).collect()
    }

    /// Iterate over every occupied square and its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of the given color.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }
}
