//! StatusIndicator - the floating "n/m decisions made" badge.

use serde::Serialize;
use std::fmt;

/// Message shown once every decision is approved.
pub const COMPLETION_MESSAGE: &str = "All decisions completed ✓";

/// Colour scheme of the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Progress,
    Complete,
}

impl StatusTone {
    /// CSS colour used for the badge background.
    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Progress => "var(--color-cyan-accent)",
            StatusTone::Complete => "var(--color-success-green)",
        }
    }
}

/// Rendered state of the badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    pub visible: bool,
    pub text: String,
    pub tone: StatusTone,
}

impl StatusIndicator {
    /// Derives the badge for `checked` approved items out of `total`.
    ///
    /// Hidden while nothing is checked. An empty decision set never shows.
    pub fn derive(checked: usize, total: usize) -> Self {
        if checked == 0 {
            return Self {
                visible: false,
                text: String::new(),
                tone: StatusTone::Progress,
            };
        }
        if checked == total {
            return Self {
                visible: true,
                text: COMPLETION_MESSAGE.to_string(),
                tone: StatusTone::Complete,
            };
        }
        Self {
            visible: true,
            text: format!("{}/{} decisions made", checked, total),
            tone: StatusTone::Progress,
        }
    }
}

impl fmt::Display for StatusIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.visible {
            write!(f, "{}", self.text)
        } else {
            write!(f, "(hidden)")
        }
    }
}
