//! Portfolio navigation - navbar styling, active section tracking and the
//! mobile menu.

use serde::{Deserialize, Serialize};

/// Scroll offset past which the navbar switches to its scrolled style.
pub const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Look-ahead added to the scroll position when picking the active section.
pub const DEFAULT_SECTION_OFFSET_PX: f64 = 100.0;
/// Header height assumed when the navbar cannot be measured.
pub const FALLBACK_HEADER_HEIGHT_PX: f64 = 70.0;

/// Navbar appearance for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Top,
    Scrolled,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Top
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarStyle::Top => "rgba(252, 252, 249, 0.95)",
            NavbarStyle::Scrolled => "rgba(252, 252, 249, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarStyle::Top => "none",
            NavbarStyle::Scrolled => "var(--shadow-sm)",
        }
    }
}

/// Vertical extent of a page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionLayout {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section whose extent contains `scroll_y + offset_px`. When sections
/// overlap the last one in page order wins. `None` means the current
/// highlight should be left alone.
pub fn active_section(scroll_y: f64, sections: &[SectionLayout], offset_px: f64) -> Option<&str> {
    let position = scroll_y + offset_px;
    sections
        .iter()
        .filter(|s| s.contains(position))
        .last()
        .map(|s| s.id.as_str())
}

/// Scroll offset that puts a section just below the fixed header.
pub fn scroll_target(section_top: f64, header_height: Option<f64>) -> f64 {
    section_top - header_height.unwrap_or(FALLBACK_HEADER_HEIGHT_PX)
}

/// Transform and visibility of the three hamburger bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HamburgerState {
    pub bars: [BarStyle; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub visible: bool,
}

impl HamburgerState {
    pub fn open() -> Self {
        Self {
            bars: [
                BarStyle {
                    transform: "rotate(45deg) translate(5px, 5px)",
                    visible: true,
                },
                BarStyle {
                    transform: "none",
                    visible: false,
                },
                BarStyle {
                    transform: "rotate(-45deg) translate(7px, -6px)",
                    visible: true,
                },
            ],
        }
    }

    pub fn closed() -> Self {
        let bar = BarStyle {
            transform: "none",
            visible: true,
        };
        Self {
            bars: [bar.clone(), bar.clone(), bar],
        }
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn hamburger_state(&self) -> HamburgerState {
        if self.open {
            HamburgerState::open()
        } else {
            HamburgerState::closed()
        }
    }
}
