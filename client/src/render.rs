use common::games::tictactoe::{
    BOARD_SIZE, COMPUTER_MARK, ModeSettings, OutcomeEvent, Position, TicTacToeGameState,
};

const COLUMN_HEADER: &str = "    0   1   2";
const ROW_DIVIDER: &str = "   ---+---+---";

/// Winning cells are drawn in brackets.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let mut lines = vec![COLUMN_HEADER.to_string()];

    for (row, cells) in state.board.rows().iter().enumerate() {
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, mark)| {
                let position = Position::new(row, col);
                if state.winning_cells.is_some_and(|line| line.contains(position)) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        lines.push(format!("{}  {}", row, rendered.join("|")));
        if row + 1 < BOARD_SIZE {
            lines.push(ROW_DIVIDER.to_string());
        }
    }

    lines.join("\n")
}

pub fn render_mode(mode: &ModeSettings) -> String {
    if mode.vs_computer {
        format!("Mode: versus computer ({})", mode.difficulty)
    } else {
        "Mode: two players".to_string()
    }
}

pub fn render_status(state: &TicTacToeGameState, mode: &ModeSettings) -> String {
    if let Some(winner) = state.winner {
        return format!("{} wins! Type 'reset' to play again.", winner);
    }
    if state.is_draw {
        return "It's a draw. Type 'reset' to play again.".to_string();
    }
    if mode.vs_computer && state.current_player == COMPUTER_MARK {
        return format!("{} to move (computer is thinking...)", state.current_player);
    }
    format!("{} to move", state.current_player)
}

pub fn render_screen(state: &TicTacToeGameState, mode: &ModeSettings) -> String {
    format!(
        "{}\n\n{}\n{}",
        render_mode(mode),
        render_board(state),
        render_status(state, mode)
    )
}

pub fn render_celebration(event: &OutcomeEvent) -> String {
    match event {
        OutcomeEvent::Won { mark, line } => {
            let cells: Vec<String> = line.cells.iter().map(ToString::to_string).collect();
            format!("*** {} takes {} ***", mark, cells.join(" "))
        }
        OutcomeEvent::Draw => "--- Nobody wins this time ---".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Difficulty, Mark, detect_outcome_change};

    fn play(moves: &[(usize, usize)]) -> TicTacToeGameState {
        moves
            .iter()
            .fold(TicTacToeGameState::new(), |state, &(row, col)| {
                state.apply_move(Position::new(row, col)).unwrap()
            })
    }

    #[test]
    fn test_empty_board_layout() {
        let board = render_board(&TicTacToeGameState::new());
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "0   . | . | . ");
        assert_eq!(lines[2], ROW_DIVIDER);
    }

    #[test]
    fn test_winning_cells_are_bracketed() {
        let state = play(&[(0, 0), (1, 1), (1, 0), (2, 1), (2, 0)]);
        let board = render_board(&state);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[1], "0  [X]| . | . ");
        assert_eq!(lines[3], "1  [X]| O | . ");
        assert_eq!(lines[5], "2  [X]| O | . ");
    }

    #[test]
    fn test_status_lines() {
        let two_players = ModeSettings::default();
        let vs_computer = ModeSettings {
            vs_computer: true,
            difficulty: Difficulty::Hard,
        };

        let opening = play(&[(0, 0)]);
        assert_eq!(render_status(&opening, &two_players), "O to move");
        assert!(render_status(&opening, &vs_computer).contains("thinking"));
        assert_eq!(render_mode(&vs_computer), "Mode: versus computer (hard)");

        let won = play(&[(0, 0), (1, 1), (1, 0), (2, 1), (2, 0)]);
        assert!(render_status(&won, &two_players).starts_with("X wins"));
    }

    #[test]
    fn test_celebration_names_line() {
        let before = play(&[(0, 0), (1, 1), (1, 0), (2, 1)]);
        let after = before.apply_move(Position::new(2, 0)).unwrap();
        let event = detect_outcome_change(&before, &after).unwrap();
        assert_eq!(render_celebration(&event), "*** X takes (0, 0) (1, 0) (2, 0) ***");
        assert_eq!(after.current_player, Mark::X);
    }
}
