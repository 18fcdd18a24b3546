use super::game_state::TicTacToeGameState;
use super::types::{Mark, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeEvent {
    Won { mark: Mark, line: WinningLine },
    Draw,
}

/// Fires only when `current` ends a game that `previous` had still open,
/// so re-reading the same terminal snapshot yields nothing.
pub fn detect_outcome_change(
    previous: &TicTacToeGameState,
    current: &TicTacToeGameState,
) -> Option<OutcomeEvent> {
    if previous.is_terminal() || !current.is_terminal() {
        return None;
    }

    match (current.winner, current.winning_cells) {
        (Some(mark), Some(line)) => Some(OutcomeEvent::Won { mark, line }),
        _ if current.is_draw => Some(OutcomeEvent::Draw),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Position;

    fn play(moves: &[(usize, usize)]) -> TicTacToeGameState {
        moves
            .iter()
            .fold(TicTacToeGameState::new(), |state, &(row, col)| {
                state.apply_move(Position::new(row, col)).unwrap()
            })
    }

    #[test]
    fn test_win_fires_once() {
        let before = play(&[(0, 0), (1, 1), (1, 0), (2, 1)]);
        let after = before.apply_move(Position::new(2, 0)).unwrap();

        match detect_outcome_change(&before, &after) {
            Some(OutcomeEvent::Won { mark, line }) => {
                assert_eq!(mark, Mark::X);
                assert!(line.contains(Position::new(1, 0)));
            }
            other => panic!("expected win event, got {:?}", other),
        }
        assert_eq!(detect_outcome_change(&after, &after), None);
    }

    #[test]
    fn test_ongoing_move_fires_nothing() {
        let before = play(&[(0, 0)]);
        let after = before.apply_move(Position::new(1, 1)).unwrap();
        assert_eq!(detect_outcome_change(&before, &after), None);
    }

    #[test]
    fn test_draw_fires() {
        let before = play(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (1, 2), (2, 2)]);
        let after = before.apply_move(Position::new(2, 1)).unwrap();
        assert_eq!(detect_outcome_change(&before, &after), Some(OutcomeEvent::Draw));
    }

    #[test]
    fn test_reset_after_win_fires_nothing() {
        let won = play(&[(0, 0), (1, 1), (1, 0), (2, 1), (2, 0)]);
        assert_eq!(detect_outcome_change(&won, &TicTacToeGameState::new()), None);
    }
}
