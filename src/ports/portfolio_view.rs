//! Portfolio View Port - Render target for the portfolio page.

use crate::domain::portfolio::{HamburgerState, NavbarStyle};

/// Port for rendering navbar, menu and counter changes on the portfolio page.
pub trait PortfolioView: Send + Sync {
    fn set_navbar_style(&self, style: NavbarStyle);

    /// Marks the navigation link for `section_id` as the only active link.
    fn set_active_link(&self, section_id: &str);

    /// Opens or closes the mobile menu and redraws the hamburger bars.
    fn set_menu(&self, open: bool, hamburger: &HamburgerState);

    /// Smoothly scrolls the page to an absolute offset.
    fn scroll_to(&self, top: f64);

    /// Replaces the text of an achievement counter.
    fn set_counter_text(&self, counter: usize, text: &str);
}
