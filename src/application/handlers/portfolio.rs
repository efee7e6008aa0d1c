//! PortfolioPage - scroll, menu and counter behavior of the portfolio page.

use std::sync::Arc;

use tracing::debug;

use crate::config::PortfolioConfig;
use crate::domain::deck::{Key, KeyPress};
use crate::domain::portfolio::{
    active_section, scroll_target, CounterAnimation, CounterTarget, CounterTrigger, MobileMenu,
    NavbarStyle, SectionLayout, DEFAULT_SCROLLED_THRESHOLD_PX, DEFAULT_SECTION_OFFSET_PX,
};
use crate::ports::{PortfolioView, TaskScheduler};

/// Layout measurements and thresholds for the page.
#[derive(Debug, Clone)]
pub struct PortfolioSettings {
    pub scrolled_threshold_px: f64,
    pub section_offset_px: f64,
    pub header_height_px: Option<f64>,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            section_offset_px: DEFAULT_SECTION_OFFSET_PX,
            header_height_px: None,
        }
    }
}

impl From<&PortfolioConfig> for PortfolioSettings {
    fn from(config: &PortfolioConfig) -> Self {
        Self {
            scrolled_threshold_px: config.scrolled_threshold_px,
            section_offset_px: config.section_offset_px,
            header_height_px: config.header_height_px,
        }
    }
}

/// Controller for one portfolio page view.
pub struct PortfolioPage {
    view: Arc<dyn PortfolioView>,
    scheduler: Arc<dyn TaskScheduler>,
    settings: PortfolioSettings,
    sections: Vec<SectionLayout>,
    /// Achievement metric texts as authored, e.g. `95%`.
    metrics: Vec<String>,
    navbar: Option<NavbarStyle>,
    active_link: Option<String>,
    menu: MobileMenu,
    counters: CounterTrigger,
}

impl PortfolioPage {
    pub fn new(
        view: Arc<dyn PortfolioView>,
        scheduler: Arc<dyn TaskScheduler>,
        settings: PortfolioSettings,
        sections: Vec<SectionLayout>,
        metrics: Vec<String>,
    ) -> Self {
        Self {
            view,
            scheduler,
            settings,
            sections,
            metrics,
            navbar: None,
            active_link: None,
            menu: MobileMenu::default(),
            counters: CounterTrigger::default(),
        }
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Restyles the navbar and moves the active link to the section under
    /// the scroll position.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        let style = NavbarStyle::for_scroll(scroll_y, self.settings.scrolled_threshold_px);
        if self.navbar != Some(style) {
            self.navbar = Some(style);
            self.view.set_navbar_style(style);
        }

        let Some(section) = active_section(scroll_y, &self.sections, self.settings.section_offset_px)
        else {
            return;
        };
        if self.active_link.as_deref() != Some(section) {
            let section = section.to_string();
            self.view.set_active_link(&section);
            self.active_link = Some(section);
        }
    }

    /// Starts the count-up animation the first time the achievements come
    /// into view. Returns false on later calls.
    pub fn on_achievements_visible(&mut self) -> bool {
        if !self.counters.fire() {
            return false;
        }

        for (index, text) in self.metrics.iter().enumerate() {
            let Some(target) = CounterTarget::parse(text) else {
                debug!(counter = index, text = %text, "Counter not animated");
                continue;
            };
            for (offset, frame) in CounterAnimation::new(target).frames() {
                let view = Arc::clone(&self.view);
                self.scheduler
                    .schedule(offset, Box::new(move || view.set_counter_text(index, &frame)));
            }
        }
        true
    }

    /// Escape closes the mobile menu. Returns true if the key was acted on.
    pub fn on_key(&mut self, press: KeyPress) -> bool {
        if press.key == Key::Escape && self.menu.is_open() {
            self.close_menu();
            return true;
        }
        false
    }

    /// Opens or closes the mobile menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        let open = self.menu.toggle();
        self.view.set_menu(open, &self.menu.hamburger_state());
        open
    }

    /// Scrolls to a section below the fixed header and marks its link.
    /// The mobile menu closes on any link click. Returns false for an
    /// unknown section.
    pub fn on_nav_link(&mut self, section_id: &str) -> bool {
        self.close_menu();

        let Some(top) = self
            .sections
            .iter()
            .find(|s| s.id == section_id)
            .map(|s| s.top)
        else {
            debug!(section = section_id, "Unknown section link");
            return false;
        };

        self.view
            .scroll_to(scroll_target(top, self.settings.header_height_px));
        self.view.set_active_link(section_id);
        self.active_link = Some(section_id.to_string());
        true
    }

    fn close_menu(&mut self) {
        if self.menu.close() {
            self.view.set_menu(false, &self.menu.hamburger_state());
        }
    }
}
