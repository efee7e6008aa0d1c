//! DecisionTracker - approval flags for the decision checkboxes.

use std::sync::Arc;

use tracing::debug;

use super::item::DecisionItem;
use super::snapshot::{DecisionRecord, DecisionSnapshot};
use super::status::StatusIndicator;
use crate::domain::foundation::{DecisionItemId, IncidentId, Timestamp};
use crate::ports::DecisionStatusView;

/// Owns the fixed set of decision items and renders their derived status.
pub struct DecisionTracker {
    items: Vec<DecisionItem>,
    view: Arc<dyn DecisionStatusView>,
}

impl DecisionTracker {
    /// Creates a tracker with every item unapproved. Nothing is rendered
    /// until the first change, matching a page with no checked boxes.
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        view: Arc<dyn DecisionStatusView>,
    ) -> Self {
        let items = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| DecisionItem::new(DecisionItemId::new(i), label))
            .collect();
        Self { items, view }
    }

    pub fn items(&self) -> &[DecisionItem] {
        &self.items
    }

    pub fn item(&self, id: DecisionItemId) -> Option<&DecisionItem> {
        self.items.get(id.value())
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_approved()).count()
    }

    pub fn status(&self) -> StatusIndicator {
        StatusIndicator::derive(self.checked_count(), self.total())
    }

    /// Flips an item's approval. Returns the new flag, or `None` for an
    /// unknown id.
    pub fn toggle(&mut self, id: DecisionItemId) -> Option<bool> {
        let Some(item) = self.items.get_mut(id.value()) else {
            debug!(item = %id, "Ignoring toggle of unknown decision");
            return None;
        };
        let approved = item.toggle();
        self.render_change(id, approved);
        Some(approved)
    }

    /// Sets an item's approval to an explicit value (a checkbox change event
    /// carrying its checked state). Returns false for an unknown id.
    pub fn set_approved(&mut self, id: DecisionItemId, approved: bool) -> bool {
        let Some(item) = self.items.get_mut(id.value()) else {
            debug!(item = %id, "Ignoring change of unknown decision");
            return false;
        };
        item.set_approved(approved);
        self.render_change(id, approved);
        true
    }

    /// Builds an export record of the current flags. Does not mutate state.
    pub fn export_snapshot(&self, incident_id: &IncidentId, at: Timestamp) -> DecisionSnapshot {
        DecisionSnapshot {
            timestamp: at,
            incident_id: incident_id.clone(),
            items: self
                .items
                .iter()
                .map(|item| DecisionRecord {
                    label: item.label().to_string(),
                    approved: item.is_approved(),
                })
                .collect(),
        }
    }

    fn render_change(&self, id: DecisionItemId, approved: bool) {
        self.view.set_item_highlight(id, approved);
        let status = self.status();
        debug!(
            item = %id,
            approved,
            checked = self.checked_count(),
            total = self.total(),
            "Decision changed"
        );
        self.view.show_status(&status);
    }
}
