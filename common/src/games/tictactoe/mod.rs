mod board;
mod bot_controller;
mod engine;
mod events;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, get_available_moves, is_valid_move};
pub use bot_controller::{COMPUTER_MARK, HUMAN_MARK, calculate_move, get_best_move, minimax};
pub use engine::GameEngine;
pub use events::{OutcomeEvent, detect_outcome_change};
pub use game_state::{MoveError, TicTacToeGameState};
pub use settings::{DEFAULT_COMPUTER_DELAY, TicTacToeSettings};
pub use types::{Difficulty, GameStatus, Mark, ModeSettings, Position, WinningLine};
pub use win_detector::{Outcome, WINNING_LINES, check_outcome, check_win, check_win_with_line};
