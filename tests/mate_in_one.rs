use serde::Deserialize;

use chess_core::board::{calculate_best_move, Board, Color, Square};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    placement: String,
    side: String,
    moves: String,
}

impl Problem {
    fn board(&self) -> Board {
        Board::from_placement(&self.placement)
            .unwrap_or_else(|err| panic!("bad placement {}: {err}", self.placement))
    }

    fn side(&self) -> Color {
        match self.side.as_str() {
            "white" => Color::White,
            "black" => Color::Black,
            other => panic!("unknown side {other}"),
        }
    }

    /// The first move of the solution line, `"a1-a8"` style.
    fn first_move(&self) -> (Square, Square) {
        let first = self.moves.split(';').next().unwrap_or(&self.moves);
        let (from, to) = first
            .split_once('-')
            .unwrap_or_else(|| panic!("bad move {first}"));
        (from.parse().unwrap(), to.parse().unwrap())
    }
}

fn load() -> ProblemSet {
    let data = include_str!("data/problems.json");
    serde_json::from_str(data).expect("invalid problems.json")
}

#[test]
fn mate_in_one_suite() {
    let set = load();
    let mut checked = 0;

    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let board = problem.board();
        let side = problem.side();
        let (from, to) = problem.first_move();

        assert!(
            board.legal_moves(from, None).contains(&to),
            "solution not legal in {}",
            problem.placement
        );
        let outcome = board.make_move(from, to, None, None).unwrap();
        assert!(
            outcome.is_checkmate,
            "mate in one failed for {} move: {}",
            problem.placement,
            problem.moves
        );
        assert!(outcome.board.is_checkmate(side.opponent()));
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn mate_search_suite() {
    let set = load();

    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let board = problem.board();
        let best = calculate_best_move(&board, problem.side(), 2)
            .unwrap_or_else(|| panic!("no move found for {}", problem.placement));

        assert_eq!(
            (best.from, best.to),
            problem.first_move(),
            "search missed the mate in {}",
            problem.placement
        );
    }
}

#[test]
fn stalemate_positions_have_no_moves() {
    let set = load();

    for problem in set.problems.iter().filter(|p| p.kind == "Stalemate") {
        let board = problem.board();
        let side = problem.side();
        assert!(board.is_stalemate(side), "{} is not stalemate", problem.placement);
        assert_eq!(calculate_best_move(&board, side, 2), None);
    }
}
