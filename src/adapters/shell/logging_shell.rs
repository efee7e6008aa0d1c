//! Logging shell - a `PresentationShell` for hosts without a window.
//!
//! Tracks the fullscreen flag and counts print requests so a headless run can
//! still report what the presentation asked for.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tracing::info;

use crate::ports::PresentationShell;

#[derive(Debug, Default)]
pub struct LoggingShell {
    fullscreen: AtomicBool,
    prints: AtomicUsize,
}

impl LoggingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_count(&self) -> usize {
        self.prints.load(Ordering::SeqCst)
    }
}

impl PresentationShell for LoggingShell {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen.load(Ordering::SeqCst)
    }

    fn enter_fullscreen(&self) {
        self.fullscreen.store(true, Ordering::SeqCst);
        info!("Entered fullscreen");
    }

    fn exit_fullscreen(&self) {
        self.fullscreen.store(false, Ordering::SeqCst);
        info!("Exited fullscreen");
    }

    fn print(&self) {
        let count = self.prints.fetch_add(1, Ordering::SeqCst) + 1;
        info!(count, "Print requested");
    }
}
