//! Derived navigation view state (counter, button enablement and labels).

use serde::Serialize;
use std::fmt;

/// Label shown on the forward navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextButtonLabel {
    Next,
    Restart,
}

impl NextButtonLabel {
    pub fn text(&self) -> &'static str {
        match self {
            NextButtonLabel::Next => "Next",
            NextButtonLabel::Restart => "Restart",
        }
    }

    /// Icon drawn next to the label.
    pub fn icon(&self) -> ButtonIcon {
        match self {
            NextButtonLabel::Next => ButtonIcon::ChevronRight,
            NextButtonLabel::Restart => ButtonIcon::RotateCycle,
        }
    }
}

impl fmt::Display for NextButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonIcon {
    ChevronRight,
    RotateCycle,
}

/// Everything the navigation chrome shows for a given slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationViewState {
    pub current_index: usize,
    /// One-based counter text value.
    pub counter: usize,
    pub total: usize,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub next_label: NextButtonLabel,
}

impl NavigationViewState {
    /// Derives the chrome state for `current_index` in a deck of `total` slides.
    pub fn derive(current_index: usize, total: usize) -> Self {
        let on_last = current_index + 1 == total;
        Self {
            current_index,
            counter: current_index + 1,
            total,
            previous_disabled: current_index == 0,
            next_disabled: false,
            next_label: if on_last {
                NextButtonLabel::Restart
            } else {
                NextButtonLabel::Next
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slide_disables_previous() {
        let state = NavigationViewState::derive(0, 4);
        assert!(state.previous_disabled);
        assert!(!state.next_disabled);
        assert_eq!(state.counter, 1);
        assert_eq!(state.next_label, NextButtonLabel::Next);
    }

    #[test]
    fn last_slide_shows_restart() {
        let state = NavigationViewState::derive(3, 4);
        assert!(!state.previous_disabled);
        assert!(!state.next_disabled);
        assert_eq!(state.next_label, NextButtonLabel::Restart);
        assert_eq!(state.next_label.icon(), ButtonIcon::RotateCycle);
    }

    #[test]
    fn single_slide_deck_is_both_first_and_last() {
        let state = NavigationViewState::derive(0, 1);
        assert!(state.previous_disabled);
        assert_eq!(state.next_label, NextButtonLabel::Restart);
    }
}
