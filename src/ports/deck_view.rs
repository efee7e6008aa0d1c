//! Deck View Port - Render target for slide navigation.
//!
//! The navigator owns all state and pushes every change through this port.
//! Implementations never feed state back into the domain.

use crate::domain::deck::{ElementRef, ElementStyle, NextButtonLabel};
use crate::domain::foundation::SlideIndex;

/// Port for rendering slide, indicator and navigation chrome changes.
///
/// Calls are synchronous and must not block: they are issued from input
/// handlers and from scheduled animation tasks.
pub trait DeckView: Send + Sync {
    /// Adds or removes the active marker on a slide.
    fn set_slide_active(&self, slide: SlideIndex, active: bool);

    /// Adds or removes the active marker on a slide's indicator dot.
    fn set_indicator_active(&self, slide: SlideIndex, active: bool);

    /// Updates the one-based slide counter.
    fn set_counter(&self, ordinal: usize);

    fn set_previous_disabled(&self, disabled: bool);

    fn set_next_disabled(&self, disabled: bool);

    /// Replaces the forward button's label and icon.
    fn set_next_label(&self, label: NextButtonLabel);

    /// Applies an inline style to an animated element.
    fn apply_style(&self, element: &ElementRef, style: &ElementStyle);
}
