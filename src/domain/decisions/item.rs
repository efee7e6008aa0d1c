//! DecisionItem - a checkbox-backed approval flag.

use serde::Serialize;

use crate::domain::foundation::DecisionItemId;

/// A labelled decision that can be approved or left open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionItem {
    id: DecisionItemId,
    label: String,
    approved: bool,
}

impl DecisionItem {
    pub fn new(id: DecisionItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            approved: false,
        }
    }

    pub fn id(&self) -> DecisionItemId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// Flips the flag and returns the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.approved = !self.approved;
        self.approved
    }

    pub(crate) fn set_approved(&mut self, approved: bool) {
        self.approved = approved;
    }
}
