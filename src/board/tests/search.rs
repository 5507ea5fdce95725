//! Search tests on whole positions.

use crate::board::{
    calculate_best_move, run_search, Board, Color, Move, Piece, PieceKind, SearchConfig, Square,
    INFINITY,
};

#[test]
fn test_search_is_deterministic() {
    let board = Board::new();
    let first = calculate_best_move(&board, Color::White, 2);
    let second = calculate_best_move(&board, Color::White, 2);
    assert!(first.is_some());
    assert_eq!(first, second);
    // Searching leaves the board alone
    assert_eq!(board, Board::new());
}

#[test]
fn test_best_move_is_legal() {
    let board = Board::from_placement("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R").unwrap();
    for side in Color::BOTH {
        let mv = calculate_best_move(&board, side, 2).unwrap();
        assert_eq!(mv.piece.color, side);
        assert!(board.legal_moves(mv.from, None).contains(&mv.to));
    }
}

#[test]
fn test_black_finds_mate_in_one() {
    let board = Board::from_placement("r5k1/8/8/8/8/8/5PPP/6K1").unwrap();
    let result = run_search(&board, Color::Black, &SearchConfig::with_depth(2), None);
    let mv = result.best_move.unwrap();
    assert_eq!((mv.from, mv.to), (Square(0, 0), Square(7, 0)));
    assert_eq!(result.score, INFINITY);
}

#[test]
fn test_search_takes_en_passant_when_given_last_move() {
    // Black just played d7-d5 beside the white pawn on e5; the d5 pawn is
    // the only black material besides the king
    let board = Board::from_placement("7k/8/8/3pP3/8/8/8/K7").unwrap();
    let last = Move::quiet(
        Square(1, 3),
        Square(3, 3),
        Piece::new(PieceKind::Pawn, Color::Black),
    );

    let result = run_search(&board, Color::White, &SearchConfig::with_depth(1), Some(&last));
    let mv = result.best_move.unwrap();
    assert!(mv.is_en_passant);
    assert_eq!(mv.to, Square(2, 3));
    assert_eq!(mv.captured.map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_does_not_walk_into_capture() {
    // The white queen on d1 must not go to d7 where the king takes it
    let board = Board::from_placement("3k4/8/8/8/8/8/8/3QK3").unwrap();
    let mv = calculate_best_move(&board, Color::White, 2).unwrap();
    assert_ne!(mv.to, Square(1, 3));
}
