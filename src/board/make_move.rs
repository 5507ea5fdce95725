//! Move execution.
//!
//! `make_move` never touches the board it is called on: it returns a fresh
//! board together with the move record and the status of the side that
//! moves next.

use super::error::MoveError;
use super::{Board, CastleWing, Move, PieceKind, Square};

/// Result of executing a move.
///
/// The check flags describe the opponent of the piece that moved, on `board`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub mv: Move,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

impl Board {
    /// Execute the move `from` -> `to` and report the resulting status.
    ///
    /// The move is not validated; callers pick destinations from
    /// [`Board::legal_moves`]. A pawn reaching the last rank becomes
    /// `promotion`, or a queen when `promotion` is `None`.
    ///
    /// # Errors
    ///
    /// `MoveError::NoPieceAtSource` if `from` is empty,
    /// `MoveError::DestinationOffBoard` if `to` is not a board square, and
    /// `MoveError::InvalidPromotion` if a promoting pawn is asked to become
    /// a king or a pawn.
    pub fn make_move(
        &self,
        from: Square,
        to: Square,
        last_move: Option<&Move>,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, MoveError> {
        let mv = match self.describe_move(from, to, last_move, promotion) {
            Ok(mv) => mv,
            Err(err) => {
                log::warn!("rejected move {from} -> {to}: {err}");
                return Err(err);
            }
        };

        let board = self.apply_move(&mv);
        let opponent = mv.piece.color.opponent();
        let is_check = board.is_in_check(opponent);
        let can_move = board.has_any_legal_move(opponent, Some(&mv));

        Ok(MoveOutcome {
            board,
            mv,
            is_check,
            is_checkmate: is_check && !can_move,
            is_stalemate: !is_check && !can_move,
        })
    }

    /// Build the move record for `from` -> `to` without executing it.
    ///
    /// Categories are tried in order: castling (a king moving two columns),
    /// en passant, then a normal move with optional promotion.
    pub(crate) fn describe_move(
        &self,
        from: Square,
        to: Square,
        last_move: Option<&Move>,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { from })?;
        if !to.is_in_bounds() {
            return Err(MoveError::DestinationOffBoard { to });
        }
        let mut mv = Move::quiet(from, to, piece);

        if piece.kind == PieceKind::King && to.col().abs_diff(from.col()) == 2 {
            mv.is_castling = true;
            return Ok(mv);
        }

        if piece.kind == PieceKind::Pawn && self.can_en_passant(from, to, last_move) {
            mv.is_en_passant = true;
            mv.captured = self.piece_at(Square(from.row(), to.col()));
            return Ok(mv);
        }

        mv.captured = self.piece_at(to);
        if piece.kind == PieceKind::Pawn && to.row() == piece.color.pawn_promotion_rank() {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotion { kind });
            }
            mv.promotion = Some(kind);
        }
        Ok(mv)
    }

    /// A new board with `mv` played. Pieces that move are marked as moved.
    #[must_use]
    pub(crate) fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.take_piece(mv.from);

        if mv.is_castling {
            let wing = CastleWing::from_king_target(mv.to.col());
            let row = mv.from.row();
            if let Some(rook) = next.take_piece(Square(row, wing.rook_col())) {
                next.set_piece(Square(row, wing.rook_target_col()), rook.moved());
            }
        } else if mv.is_en_passant {
            next.take_piece(Square(mv.from.row(), mv.to.col()));
        }

        let mut piece = mv.piece.moved();
        if let Some(kind) = mv.promotion {
            piece.kind = kind;
        }
        next.set_piece(mv.to, piece);
        next
    }
}
