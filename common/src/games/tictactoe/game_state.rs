use thiserror::Error;

use super::board::{Board, is_in_bounds};
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("game is already over")]
    GameOver,
    #[error("cell {0} is already marked")]
    CellOccupied(Position),
}

/// Snapshot of a game. Transitions build a new value; a snapshot never
/// changes once handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    /// Player to move, or the player who finished the game once it is over.
    pub current_player: Mark,
    pub winner: Option<Mark>,
    pub winning_cells: Option<WinningLine>,
    pub last_move: Option<Position>,
    pub is_draw: bool,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            winner: None,
            winning_cells: None,
            last_move: None,
            is_draw: false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if self.is_draw => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    /// Places `current_player` at `position` and returns the following
    /// state. `self` is left untouched either way.
    pub fn apply_move(&self, position: Position) -> Result<Self, MoveError> {
        if !is_in_bounds(position) {
            return Err(MoveError::OutOfBounds(position));
        }

        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        if self.board.get(position) != Some(Mark::Empty) {
            return Err(MoveError::CellOccupied(position));
        }

        let mut board = self.board;
        board.set(position, self.current_player);

        let winning_cells = check_win_with_line(&board);
        let winner = winning_cells.map(|line| line.mark);
        let is_draw = winner.is_none() && board.is_full();

        let current_player = if winner.is_some() || is_draw {
            self.current_player
        } else {
            self.current_player.opponent().unwrap_or(Mark::X)
        };

        Ok(Self {
            board,
            current_player,
            winner,
            winning_cells,
            last_move: Some(position),
            is_draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::WINNING_LINES;

    fn play(moves: &[(usize, usize)]) -> TicTacToeGameState {
        moves
            .iter()
            .fold(TicTacToeGameState::new(), |state, &(row, col)| {
                state.apply_move(Position::new(row, col)).unwrap()
            })
    }

    fn assert_exactly_one_status(state: &TicTacToeGameState) {
        let flags = [
            state.winner.is_some(),
            state.is_draw,
            state.winner.is_none() && !state.is_draw,
        ];
        assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
    }

    #[test]
    fn test_new_state_is_initial() {
        let state = TicTacToeGameState::new();
        assert!(state.board.is_empty());
        assert_eq!(state.current_player, Mark::X);
        assert_eq!(state.winner, None);
        assert_eq!(state.winning_cells, None);
        assert_eq!(state.last_move, None);
        assert!(!state.is_draw);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_alternates_players() {
        let state = play(&[(0, 0)]);
        assert_eq!(state.current_player, Mark::O);
        assert_eq!(state.last_move, Some(Position::new(0, 0)));
        assert_eq!(state.board.get(Position::new(0, 0)), Some(Mark::X));

        let state = state.apply_move(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_player, Mark::X);
        assert_eq!(state.board.get(Position::new(1, 1)), Some(Mark::O));
    }

    #[test]
    fn test_apply_move_leaves_previous_snapshot_unchanged() {
        let before = play(&[(0, 0)]);
        let copy = before;
        let _after = before.apply_move(Position::new(2, 2)).unwrap();
        assert_eq!(before, copy);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let state = play(&[(0, 0), (1, 1)]);
        assert_eq!(
            state.apply_move(Position::new(1, 1)),
            Err(MoveError::CellOccupied(Position::new(1, 1)))
        );
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let state = TicTacToeGameState::new();
        assert_eq!(
            state.apply_move(Position::new(3, 0)),
            Err(MoveError::OutOfBounds(Position::new(3, 0)))
        );
    }

    #[test]
    fn test_left_column_win() {
        let state = play(&[(0, 0), (1, 1), (1, 0), (2, 1), (2, 0)]);
        assert_eq!(state.winner, Some(Mark::X));
        assert_eq!(
            state.winning_cells.map(|line| line.cells),
            Some([Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)])
        );
        assert_eq!(state.current_player, Mark::X);
        assert_eq!(state.status(), GameStatus::XWon);
        assert_exactly_one_status(&state);
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let state = play(&[(0, 0), (1, 1), (1, 0), (2, 1), (2, 0)]);
        assert_eq!(
            state.apply_move(Position::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_draw_sequence() {
        let state = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ]);
        assert!(state.is_draw);
        assert_eq!(state.winner, None);
        assert_eq!(state.winning_cells, None);
        assert_eq!(state.current_player, Mark::X);
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.is_terminal());
        assert_exactly_one_status(&state);
    }

    #[test]
    fn test_every_line_wins_through_alternating_moves() {
        for line in WINNING_LINES {
            for winner in [Mark::X, Mark::O] {
                let loser_cells: Vec<Position> = (0..3)
                    .flat_map(|row| (0..3).map(move |col| Position::new(row, col)))
                    .filter(|cell| !line.contains(cell))
                    .collect();

                let mut state = TicTacToeGameState::new();
                let mut loser_iter = loser_cells.iter();
                let mut line_iter = line.iter();
                while !state.is_terminal() {
                    let next = if state.current_player == winner {
                        *line_iter.next().unwrap()
                    } else {
                        // Skip filler cells that would complete a loser line.
                        loop {
                            let candidate = *loser_iter.next().unwrap();
                            let trial = state.apply_move(candidate).unwrap();
                            if trial.winner.is_none() {
                                break candidate;
                            }
                        }
                    };
                    state = state.apply_move(next).unwrap();
                    assert_exactly_one_status(&state);
                }

                assert_eq!(state.winner, Some(winner), "line {:?}", line);
                assert_eq!(state.winning_cells.map(|l| l.cells), Some(line));
            }
        }
    }
}
