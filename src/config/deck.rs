//! Presentation deck configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::deck::DEFAULT_SWIPE_THRESHOLD_PX;

/// Deck configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DeckConfig {
    /// Minimum horizontal swipe travel in pixels
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f32,

    /// Incident reference stamped on exported decisions
    #[serde(default = "default_incident_id")]
    pub incident_id: String,

    /// Optional YAML manifest; the built-in incident briefing is used if unset
    pub manifest_path: Option<PathBuf>,
}

impl DeckConfig {
    /// Validate deck configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px > 0.0) {
            return Err(ValidationError::InvalidSwipeThreshold);
        }
        if self.incident_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("deck.incident_id"));
        }
        Ok(())
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold(),
            incident_id: default_incident_id(),
            manifest_path: None,
        }
    }
}

fn default_swipe_threshold() -> f32 {
    DEFAULT_SWIPE_THRESHOLD_PX
}

fn default_incident_id() -> String {
    "INC-2025-0904-001".to_string()
}
