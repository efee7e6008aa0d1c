//! Adapters - Implementations of port interfaces.
//!
//! - `scheduler` - Virtual-clock and tokio task schedulers
//! - `view` - In-memory render targets
//! - `shell` - Headless presentation shell
//! - `export` - Local file snapshot export

pub mod export;
pub mod scheduler;
pub mod shell;
pub mod view;

pub use export::LocalSnapshotExporter;
pub use scheduler::{ManualTaskScheduler, TokioTaskScheduler};
pub use shell::LoggingShell;
pub use view::{
    RecordingContactView, RecordingDeckView, RecordingDecisionView, RecordingPortfolioView,
};
