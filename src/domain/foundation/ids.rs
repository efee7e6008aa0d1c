//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Position of a slide within its deck (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideIndex(usize);

impl SlideIndex {
    /// The first slide of every deck.
    pub const FIRST: Self = Self(0);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw position.
    pub fn value(&self) -> usize {
        self.0
    }

    /// One-based position, as shown on the slide counter.
    pub fn ordinal(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a decision checkbox (its position in the page order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionItemId(usize);

impl DecisionItemId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw position.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DecisionItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decision-{}", self.0)
    }
}

/// Incident reference stamped on exported decision records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(String);

impl IncidentId {
    /// Creates a new IncidentId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("incident_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_index_ordinal_is_one_based() {
        assert_eq!(SlideIndex::FIRST.ordinal(), 1);
        assert_eq!(SlideIndex::new(3).ordinal(), 4);
    }

    #[test]
    fn decision_item_id_displays_with_prefix() {
        assert_eq!(DecisionItemId::new(2).to_string(), "decision-2");
    }

    #[test]
    fn incident_id_rejects_blank_values() {
        assert!(IncidentId::new("").is_err());
        assert!(IncidentId::new("   ").is_err());
    }

    #[test]
    fn incident_id_serializes_transparently() {
        let id = IncidentId::new("INC-2025-0904-001").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"INC-2025-0904-001\"");
    }
}
