mod scheduler;

pub mod tictactoe;

pub use scheduler::{InlineScheduler, MoveScheduler, ScheduledTask, TokioScheduler};
