//! Recording portfolio and contact form views.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::portfolio::{FieldError, HamburgerState, NavbarStyle};
use crate::ports::{ContactFormView, PortfolioView};

#[derive(Default)]
struct PortfolioViewState {
    navbar: Option<NavbarStyle>,
    active_link: Option<String>,
    menu_open: bool,
    hamburger: Option<HamburgerState>,
    scrolls: Vec<f64>,
    counters: HashMap<usize, String>,
}

/// In-memory `PortfolioView`.
#[derive(Default)]
pub struct RecordingPortfolioView {
    state: RwLock<PortfolioViewState>,
}

impl RecordingPortfolioView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navbar(&self) -> Option<NavbarStyle> {
        self.state.read().expect("RecordingPortfolioView: lock poisoned").navbar
    }

    pub fn active_link(&self) -> Option<String> {
        self.state
            .read()
            .expect("RecordingPortfolioView: lock poisoned")
            .active_link
            .clone()
    }

    pub fn menu_open(&self) -> bool {
        self.state.read().expect("RecordingPortfolioView: lock poisoned").menu_open
    }

    pub fn hamburger(&self) -> Option<HamburgerState> {
        self.state
            .read()
            .expect("RecordingPortfolioView: lock poisoned")
            .hamburger
            .clone()
    }

    pub fn last_scroll(&self) -> Option<f64> {
        self.state
            .read()
            .expect("RecordingPortfolioView: lock poisoned")
            .scrolls
            .last()
            .copied()
    }

    pub fn counter_text(&self, counter: usize) -> Option<String> {
        self.state
            .read()
            .expect("RecordingPortfolioView: lock poisoned")
            .counters
            .get(&counter)
            .cloned()
    }
}

impl PortfolioView for RecordingPortfolioView {
    fn set_navbar_style(&self, style: NavbarStyle) {
        self.state
            .write()
            .expect("RecordingPortfolioView: write lock poisoned")
            .navbar = Some(style);
    }

    fn set_active_link(&self, section_id: &str) {
        self.state
            .write()
            .expect("RecordingPortfolioView: write lock poisoned")
            .active_link = Some(section_id.to_string());
    }

    fn set_menu(&self, open: bool, hamburger: &HamburgerState) {
        let mut state = self
            .state
            .write()
            .expect("RecordingPortfolioView: write lock poisoned");
        state.menu_open = open;
        state.hamburger = Some(hamburger.clone());
    }

    fn scroll_to(&self, top: f64) {
        self.state
            .write()
            .expect("RecordingPortfolioView: write lock poisoned")
            .scrolls
            .push(top);
    }

    fn set_counter_text(&self, counter: usize, text: &str) {
        self.state
            .write()
            .expect("RecordingPortfolioView: write lock poisoned")
            .counters
            .insert(counter, text.to_string());
    }
}

#[derive(Default)]
struct ContactViewState {
    errors: Vec<FieldError>,
    button: Option<(String, bool)>,
    success: Option<String>,
    resets: usize,
}

/// In-memory `ContactFormView`.
#[derive(Default)]
pub struct RecordingContactView {
    state: RwLock<ContactViewState>,
}

impl RecordingContactView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.state
            .read()
            .expect("RecordingContactView: lock poisoned")
            .errors
            .clone()
    }

    /// Latest `(text, disabled)` of the submit button.
    pub fn submit_button(&self) -> Option<(String, bool)> {
        self.state
            .read()
            .expect("RecordingContactView: lock poisoned")
            .button
            .clone()
    }

    pub fn success(&self) -> Option<String> {
        self.state
            .read()
            .expect("RecordingContactView: lock poisoned")
            .success
            .clone()
    }

    pub fn reset_count(&self) -> usize {
        self.state.read().expect("RecordingContactView: lock poisoned").resets
    }
}

impl ContactFormView for RecordingContactView {
    fn show_errors(&self, errors: &[FieldError]) {
        self.state
            .write()
            .expect("RecordingContactView: write lock poisoned")
            .errors = errors.to_vec();
    }

    fn set_submit_button(&self, text: &str, disabled: bool) {
        self.state
            .write()
            .expect("RecordingContactView: write lock poisoned")
            .button = Some((text.to_string(), disabled));
    }

    fn show_success(&self, message: &str) {
        self.state
            .write()
            .expect("RecordingContactView: write lock poisoned")
            .success = Some(message.to_string());
    }

    fn clear_success(&self) {
        self.state
            .write()
            .expect("RecordingContactView: write lock poisoned")
            .success = None;
    }

    fn reset(&self) {
        self.state
            .write()
            .expect("RecordingContactView: write lock poisoned")
            .resets += 1;
    }
}
