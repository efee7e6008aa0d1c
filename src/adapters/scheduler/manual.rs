//! Manual task scheduler - deterministic virtual clock.
//!
//! Time only moves when `advance` is called, which makes animation and
//! debounce behavior reproducible in tests and in the headless driver.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned, which can only happen if a
//! scheduled task panicked while the lock was held.

use std::sync::Mutex;
use std::time::Duration;

use crate::ports::{ScheduledTask, TaskHandle, TaskScheduler};

struct PendingTask {
    handle: TaskHandle,
    due: Duration,
    task: ScheduledTask,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// # Example
///
/// ```ignore
/// let scheduler = ManualTaskScheduler::new();
/// scheduler.schedule(Duration::from_millis(300), Box::new(|| println!("fired")));
/// scheduler.advance(Duration::from_millis(300)); // prints "fired"
/// ```
#[derive(Default)]
pub struct ManualTaskScheduler {
    state: Mutex<ClockState>,
}

impl ManualTaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.state
            .lock()
            .expect("ManualTaskScheduler: lock poisoned")
            .now
    }

    pub fn pending_count(&self) -> usize {
        self.state
            .lock()
            .expect("ManualTaskScheduler: lock poisoned")
            .pending
            .len()
    }

    /// Moves the clock forward, running every task that falls due in due-time
    /// order (ties in scheduling order). Tasks run without the lock held, so
    /// they may schedule or cancel further tasks.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        self.state
            .lock()
            .expect("ManualTaskScheduler: lock poisoned")
            .now = target;
        ran
    }

    /// Runs everything still pending, however far in the future.
    pub fn run_all(&self) -> usize {
        let last_due = {
            let state = self.state.lock().expect("ManualTaskScheduler: lock poisoned");
            state.pending.iter().map(|p| p.due).max()
        };
        match last_due {
            Some(due) => {
                let now = self.now();
                self.advance(due.saturating_sub(now))
            }
            None => 0,
        }
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut state = self.state.lock().expect("ManualTaskScheduler: lock poisoned");
        let position = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.handle))
            .map(|(i, _)| i)?;
        let pending = state.pending.remove(position);
        state.now = pending.due;
        Some(pending.task)
    }
}

impl TaskScheduler for ManualTaskScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TaskHandle {
        let mut state = self.state.lock().expect("ManualTaskScheduler: lock poisoned");
        let handle = TaskHandle::new(state.next_id);
        state.next_id += 1;
        let due = state.now + delay;
        state.pending.push(PendingTask { handle, due, task });
        handle
    }

    fn cancel(&self, handle: TaskHandle) -> bool {
        let mut state = self.state.lock().expect("ManualTaskScheduler: lock poisoned");
        let before = state.pending.len();
        state.pending.retain(|p| p.handle != handle);
        state.pending.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> ScheduledTask) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let make = move |label: &'static str| -> ScheduledTask {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().unwrap().push(label))
        };
        (log, make)
    }

    #[test]
    fn tasks_run_in_due_order() {
        let scheduler = ManualTaskScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(Duration::from_millis(200), task("late"));
        scheduler.schedule(Duration::from_millis(100), task("early"));
        scheduler.schedule(Duration::from_millis(100), task("tie"));

        assert_eq!(scheduler.advance(Duration::from_millis(250)), 3);
        assert_eq!(*log.lock().unwrap(), vec!["early", "tie", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(250));
    }

    #[test]
    fn tasks_not_yet_due_stay_pending() {
        let scheduler = ManualTaskScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(Duration::from_millis(100), task("a"));

        scheduler.advance(Duration::from_millis(99));
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*log.lock().unwrap(), vec!["a"]);
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let scheduler = ManualTaskScheduler::new();
        let (log, task) = recorder();
        let handle = scheduler.schedule(Duration::from_millis(10), task("a"));

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        scheduler.advance(Duration::from_secs(1));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let scheduler = ManualTaskScheduler::new();
        let (log, task) = recorder();
        scheduler.advance(Duration::from_millis(500));
        scheduler.schedule(Duration::from_millis(100), task("a"));

        scheduler.advance(Duration::from_millis(50));
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(scheduler.run_all(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(600));
    }
}
