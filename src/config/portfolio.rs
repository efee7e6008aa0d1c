//! Portfolio page configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::portfolio::{DEFAULT_SCROLLED_THRESHOLD_PX, DEFAULT_SECTION_OFFSET_PX};

/// Portfolio page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    /// Scroll offset past which the navbar takes its scrolled style
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold_px: f64,

    /// Look-ahead used when picking the active section
    #[serde(default = "default_section_offset")]
    pub section_offset_px: f64,

    /// Measured navbar height; the fallback height is used if unset
    pub header_height_px: Option<f64>,
}

impl PortfolioConfig {
    /// Validate portfolio configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let offsets = [
            Some(self.scrolled_threshold_px),
            Some(self.section_offset_px),
            self.header_height_px,
        ];
        if offsets.iter().flatten().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ValidationError::InvalidPortfolioOffset);
        }
        Ok(())
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: default_scrolled_threshold(),
            section_offset_px: default_section_offset(),
            header_height_px: None,
        }
    }
}

fn default_scrolled_threshold() -> f64 {
    DEFAULT_SCROLLED_THRESHOLD_PX
}

fn default_section_offset() -> f64 {
    DEFAULT_SECTION_OFFSET_PX
}
