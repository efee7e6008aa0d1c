//! Task Scheduler Port - Deferred, cancellable callbacks.
//!
//! Replaces ad-hoc timers: every deferred effect gets a `TaskHandle` that its
//! owner stores and cancels when the effect is superseded.

use std::fmt;
use std::time::Duration;

/// A callback run once when its delay elapses.
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Port for scheduling deferred work.
///
/// # Contract
///
/// - A task runs at most once, no earlier than `delay` after scheduling
/// - A cancelled task never runs; cancelling a finished or unknown handle
///   returns `false`
pub trait TaskScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TaskHandle;

    /// Cancels a pending task. Returns true if it was still pending.
    fn cancel(&self, handle: TaskHandle) -> bool;
}
