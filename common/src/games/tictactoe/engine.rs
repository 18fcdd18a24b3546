use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::games::MoveScheduler;
use crate::log;
use super::bot_controller::{COMPUTER_MARK, calculate_move};
use super::game_state::{MoveError, TicTacToeGameState};
use super::settings::TicTacToeSettings;
use super::types::{Difficulty, ModeSettings, Position};

struct EngineInner {
    state: watch::Sender<TicTacToeGameState>,
    mode: watch::Sender<ModeSettings>,
    /// Advanced by every reset, under the state channel's write lock.
    epoch: AtomicU64,
    computer_delay: Duration,
    scheduler: Arc<dyn MoveScheduler>,
}

/// Owns the current game and the mode flags. Cloning yields another handle
/// to the same game.
#[derive(Clone)]
pub struct GameEngine {
    inner: Arc<EngineInner>,
}

impl GameEngine {
    pub fn new(settings: TicTacToeSettings, scheduler: Arc<dyn MoveScheduler>) -> Self {
        let (state, _) = watch::channel(TicTacToeGameState::new());
        let (mode, _) = watch::channel(settings.mode());

        Self {
            inner: Arc::new(EngineInner {
                state,
                mode,
                epoch: AtomicU64::new(0),
                computer_delay: settings.computer_delay,
                scheduler,
            }),
        }
    }

    pub fn state(&self) -> TicTacToeGameState {
        *self.inner.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<TicTacToeGameState> {
        self.inner.state.subscribe()
    }

    pub fn mode(&self) -> ModeSettings {
        *self.inner.mode.borrow()
    }

    pub fn subscribe_mode(&self) -> watch::Receiver<ModeSettings> {
        self.inner.mode.subscribe()
    }

    pub fn reset(&self) {
        self.inner.state.send_modify(|state| {
            self.inner.epoch.fetch_add(1, Ordering::SeqCst);
            *state = TicTacToeGameState::new();
        });
        log!("Game reset");
    }

    pub fn set_vs_computer_mode(&self, enabled: bool) {
        self.inner.mode.send_modify(|mode| mode.vs_computer = enabled);
        log!("Versus computer mode {}", if enabled { "enabled" } else { "disabled" });
        self.reset();
    }

    pub fn set_difficulty(&self, difficulty: Difficulty) {
        self.inner.mode.send_modify(|mode| mode.difficulty = difficulty);
        log!("Difficulty set to {}", difficulty);
        self.reset();
    }

    /// Invalid moves leave the game untouched and are only logged.
    pub fn make_move(&self, row: usize, col: usize) {
        if let Err(e) = self.try_make_move(row, col) {
            log!("Ignored move at ({}, {}): {}", row, col, e);
        }
    }

    pub fn try_make_move(&self, row: usize, col: usize) -> Result<TicTacToeGameState, MoveError> {
        let next = self.apply(Position::new(row, col))?;
        self.after_move(&next);
        Ok(next)
    }

    /// Nothing is published on rejection.
    fn apply(&self, position: Position) -> Result<TicTacToeGameState, MoveError> {
        let mut outcome = None;

        self.inner.state.send_if_modified(|state| {
            let applied = state.apply_move(position);
            if let Ok(next) = applied {
                *state = next;
            }
            let modified = applied.is_ok();
            outcome = Some(applied);
            modified
        });

        outcome.unwrap_or(Err(MoveError::GameOver))
    }

    fn after_move(&self, next: &TicTacToeGameState) {
        if let Some(winner) = next.winner {
            log!("{} wins", winner);
            return;
        }
        if next.is_draw {
            log!("Game ended in a draw");
            return;
        }

        let vs_computer = self.inner.mode.borrow().vs_computer;
        if vs_computer && next.current_player == COMPUTER_MARK {
            self.schedule_computer_move();
        }
    }

    fn schedule_computer_move(&self) {
        let epoch = self.inner.epoch.load(Ordering::SeqCst);
        let engine = self.clone();
        self.inner.scheduler.schedule(
            self.inner.computer_delay,
            Box::new(move || engine.play_computer_turn(epoch)),
        );
    }

    /// Turn, epoch and search are all checked under the state write lock so
    /// a human move cannot land between choosing the cell and placing O.
    fn play_computer_turn(&self, epoch: u64) {
        let difficulty = self.mode().difficulty;
        let mut played = None;

        self.inner.state.send_if_modified(|state| {
            if self.inner.epoch.load(Ordering::SeqCst) != epoch
                || state.is_terminal()
                || state.current_player != COMPUTER_MARK
            {
                return false;
            }

            let Some(position) = calculate_move(difficulty, &state.board) else {
                return false;
            };

            match state.apply_move(position) {
                Ok(next) => {
                    *state = next;
                    played = Some((position, next));
                    true
                }
                Err(e) => {
                    log!("Discarded computer move at {}: {}", position, e);
                    false
                }
            }
        });

        if let Some((position, next)) = played {
            log!("Computer plays {}", position);
            self.after_move(&next);
        }
    }
}
