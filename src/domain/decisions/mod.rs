//! Decisions module - checkbox-tracked approvals and their export.

mod item;
mod snapshot;
mod status;
mod tracker;

pub use item::DecisionItem;
pub use snapshot::{DecisionRecord, DecisionSnapshot, DEFAULT_EXPORT_FILE_NAME};
pub use status::{StatusIndicator, StatusTone, COMPLETION_MESSAGE};
pub use tracker::DecisionTracker;
