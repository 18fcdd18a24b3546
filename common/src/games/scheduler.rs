use std::time::Duration;

use tokio::runtime::Handle;

pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs a deferred one-shot task, such as the computer's reply.
pub trait MoveScheduler: Send + Sync + 'static {
    fn schedule(&self, delay: Duration, task: ScheduledTask);
}

/// Sleeps on a tokio timer, then runs the task on the runtime.
#[derive(Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    pub fn from_current() -> Result<Self, String> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| format!("No tokio runtime available for scheduling: {}", e))
    }
}

impl MoveScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        self.handle.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            task();
        });
    }
}

/// Ignores the delay and runs the task before returning.
#[derive(Clone, Copy, Default)]
pub struct InlineScheduler;

impl MoveScheduler for InlineScheduler {
    fn schedule(&self, _delay: Duration, task: ScheduledTask) {
        task();
    }
}
