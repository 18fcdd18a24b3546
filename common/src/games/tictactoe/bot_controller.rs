use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Mark, Position};
use super::win_detector::{Outcome, check_outcome};

/// The computer always plays O and maximises.
pub const COMPUTER_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

/// Every difficulty plays the optimal move.
pub fn calculate_move(_difficulty: Difficulty, board: &Board) -> Option<Position> {
    get_best_move(board)
}

/// First maximal cell in row-major order wins ties.
pub fn get_best_move(board: &Board) -> Option<Position> {
    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in get_available_moves(&scratch) {
        scratch.set(position, COMPUTER_MARK);
        let score = minimax(&mut scratch, 0, false);
        scratch.set(position, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Scores +1 for an O win, -1 for an X win, 0 for a draw. `depth` is
/// tracked but not used to weight the score.
#[allow(clippy::only_used_in_recursion)]
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    if let Some(outcome) = check_outcome(board) {
        return score(outcome);
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut best = i32::MIN;
        for position in moves {
            board.set(position, COMPUTER_MARK);
            best = best.max(minimax(board, depth + 1, false));
            board.set(position, Mark::Empty);
        }
        best
    } else {
        let mut best = i32::MAX;
        for position in moves {
            board.set(position, HUMAN_MARK);
            best = best.min(minimax(board, depth + 1, true));
            board.set(position, Mark::Empty);
        }
        best
    }
}

fn score(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Winner(Mark::O) => 1,
        Outcome::Winner(Mark::X) => -1,
        Outcome::Winner(Mark::Empty) | Outcome::Draw => 0,
    }
}
