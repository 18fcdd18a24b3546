use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.get(a)?;
        if mark != Mark::Empty && board.get(b) == Some(mark) && board.get(c) == Some(mark) {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// `None` while the game can continue.
pub fn check_outcome(board: &Board) -> Option<Outcome> {
    if let Some(mark) = check_win(board) {
        return Some(Outcome::Winner(mark));
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}
