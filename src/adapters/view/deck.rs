//! Recording deck view - in-memory render target for the navigator.
//!
//! Keeps the latest rendered value of everything the navigator draws, which
//! is what a headless host or a test needs to inspect.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::deck::{ElementGroup, ElementRef, ElementStyle, NextButtonLabel};
use crate::domain::foundation::{Percentage, SlideIndex};
use crate::ports::DeckView;

#[derive(Debug, Clone, Default)]
struct DeckViewState {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    counter: Option<usize>,
    previous_disabled: Option<bool>,
    next_disabled: Option<bool>,
    next_label: Option<NextButtonLabel>,
    styles: HashMap<ElementRef, ElementStyle>,
}

/// In-memory `DeckView` that records the current rendering.
pub struct RecordingDeckView {
    state: RwLock<DeckViewState>,
}

impl RecordingDeckView {
    pub fn new(slide_count: usize) -> Self {
        Self {
            state: RwLock::new(DeckViewState {
                slides: vec![false; slide_count],
                indicators: vec![false; slide_count],
                ..Default::default()
            }),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, DeckViewState> {
        self.state
            .read()
            .expect("RecordingDeckView: state lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, DeckViewState> {
        self.state
            .write()
            .expect("RecordingDeckView: state write lock poisoned")
    }

    /// Indices of slides carrying the active marker.
    pub fn active_slides(&self) -> Vec<usize> {
        marked(&self.read().slides)
    }

    /// Indices of indicators carrying the active marker.
    pub fn active_indicators(&self) -> Vec<usize> {
        marked(&self.read().indicators)
    }

    pub fn counter(&self) -> Option<usize> {
        self.read().counter
    }

    pub fn previous_disabled(&self) -> Option<bool> {
        self.read().previous_disabled
    }

    pub fn next_disabled(&self) -> Option<bool> {
        self.read().next_disabled
    }

    pub fn next_label(&self) -> Option<NextButtonLabel> {
        self.read().next_label
    }

    /// Accumulated inline style of an element.
    pub fn style_of(&self, group: &str, index: usize) -> Option<ElementStyle> {
        let key = ElementRef {
            group: ElementGroup::new(group),
            index,
        };
        self.read().styles.get(&key).cloned()
    }

    pub fn width_of(&self, group: &str, index: usize) -> Option<Percentage> {
        self.style_of(group, index).and_then(|s| s.width)
    }

    pub fn opacity_of(&self, group: &str, index: usize) -> Option<f32> {
        self.style_of(group, index).and_then(|s| s.opacity)
    }

    /// One-line text rendering, e.g. `[ . o . . ] 2/4  < enabled | Next >`.
    pub fn render_line(&self) -> String {
        let state = self.read();
        let dots: Vec<&str> = state
            .indicators
            .iter()
            .map(|active| if *active { "o" } else { "." })
            .collect();
        let previous = match state.previous_disabled {
            Some(true) => "disabled",
            _ => "enabled",
        };
        let next = state.next_label.map(|l| l.text()).unwrap_or("Next");
        format!(
            "[ {} ] {}/{}  < {} | {} >",
            dots.join(" "),
            state.counter.unwrap_or(0),
            state.slides.len(),
            previous,
            next
        )
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|(_, on)| **on)
        .map(|(i, _)| i)
        .collect()
}

fn set_flag(flags: &mut Vec<bool>, index: usize, value: bool) {
    if index >= flags.len() {
        flags.resize(index + 1, false);
    }
    flags[index] = value;
}

impl DeckView for RecordingDeckView {
    fn set_slide_active(&self, slide: SlideIndex, active: bool) {
        set_flag(&mut self.write().slides, slide.value(), active);
    }

    fn set_indicator_active(&self, slide: SlideIndex, active: bool) {
        set_flag(&mut self.write().indicators, slide.value(), active);
    }

    fn set_counter(&self, ordinal: usize) {
        self.write().counter = Some(ordinal);
    }

    fn set_previous_disabled(&self, disabled: bool) {
        self.write().previous_disabled = Some(disabled);
    }

    fn set_next_disabled(&self, disabled: bool) {
        self.write().next_disabled = Some(disabled);
    }

    fn set_next_label(&self, label: NextButtonLabel) {
        self.write().next_label = Some(label);
    }

    fn apply_style(&self, element: &ElementRef, style: &ElementStyle) {
        let mut state = self.write();
        let current = state.styles.entry(element.clone()).or_default();
        if style.transform.is_some() {
            current.transform = style.transform;
        }
        if style.opacity.is_some() {
            current.opacity = style.opacity;
        }
        if style.width.is_some() {
            current.width = style.width;
        }
        if style.transition.is_some() {
            current.transition = style.transition;
        }
    }
}
