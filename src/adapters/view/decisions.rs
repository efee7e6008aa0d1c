//! Recording decision view - in-memory render target for the tracker.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::decisions::StatusIndicator;
use crate::domain::foundation::DecisionItemId;
use crate::ports::DecisionStatusView;

#[derive(Default)]
struct DecisionViewState {
    highlights: HashMap<DecisionItemId, bool>,
    statuses: Vec<StatusIndicator>,
}

/// In-memory `DecisionStatusView` keeping highlight state and status history.
#[derive(Default)]
pub struct RecordingDecisionView {
    state: RwLock<DecisionViewState>,
}

impl RecordingDecisionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self, item: DecisionItemId) -> bool {
        self.state
            .read()
            .expect("RecordingDecisionView: lock poisoned")
            .highlights
            .get(&item)
            .copied()
            .unwrap_or(false)
    }

    /// Most recently rendered badge, if any.
    pub fn last_status(&self) -> Option<StatusIndicator> {
        self.state
            .read()
            .expect("RecordingDecisionView: lock poisoned")
            .statuses
            .last()
            .cloned()
    }

    pub fn status_history(&self) -> Vec<StatusIndicator> {
        self.state
            .read()
            .expect("RecordingDecisionView: lock poisoned")
            .statuses
            .clone()
    }
}

impl DecisionStatusView for RecordingDecisionView {
    fn set_item_highlight(&self, item: DecisionItemId, highlighted: bool) {
        self.state
            .write()
            .expect("RecordingDecisionView: write lock poisoned")
            .highlights
            .insert(item, highlighted);
    }

    fn show_status(&self, status: &StatusIndicator) {
        self.state
            .write()
            .expect("RecordingDecisionView: write lock poisoned")
            .statuses
            .push(status.clone());
    }
}
