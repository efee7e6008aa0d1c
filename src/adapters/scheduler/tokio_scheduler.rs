//! Tokio task scheduler - real-time timers on a tokio runtime.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::ports::{ScheduledTask, TaskHandle, TaskScheduler};

type TaskTable = Arc<Mutex<HashMap<u64, AbortHandle>>>;

/// Runs each task on its own tokio task after sleeping for its delay.
///
/// Whichever of "timer fired" and "cancel" removes the table entry first
/// wins, so a cancelled task never runs even if its timer already elapsed.
pub struct TokioTaskScheduler {
    runtime: Handle,
    next_id: AtomicU64,
    tasks: TaskTable,
}

impl TokioTaskScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: AtomicU64::new(0),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Uses the runtime of the calling context.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    pub fn pending_count(&self) -> usize {
        lock(&self.tasks).len()
    }
}

fn lock(tasks: &TaskTable) -> MutexGuard<'_, HashMap<u64, AbortHandle>> {
    tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TaskScheduler for TokioTaskScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TaskHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let tasks = Arc::clone(&self.tasks);

        // Held until the abort handle is registered so the timer cannot
        // observe a missing entry.
        let mut table = lock(&self.tasks);
        let join = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let still_pending = lock(&tasks).remove(&id).is_some();
            if still_pending {
                task();
            }
        });
        table.insert(id, join.abort_handle());
        TaskHandle::new(id)
    }

    fn cancel(&self, handle: TaskHandle) -> bool {
        match lock(&self.tasks).remove(&handle.id()) {
            Some(abort) => {
                abort.abort();
                debug!(task = %handle, "Cancelled scheduled task");
                true
            }
            None => false,
        }
    }
}
