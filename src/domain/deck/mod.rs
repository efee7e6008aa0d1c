//! Deck module - slide navigation for the presentation viewer.
//!
//! - `Deck` / `Slide` - the fixed, ordered slide collection
//! - `SlideNavigator` - the navigation state machine
//! - `EntrySequence` - per-slide staggered entry animations
//! - `input` - key, swipe and shortcut bindings
//! - `DeckManifest` - declarative page structure

mod entry;
mod input;
mod manifest;
mod navigator;
mod slide;
mod view_state;

pub use entry::{
    ElementGroup, ElementRef, ElementStyle, EntryEffect, EntrySequence, EntryStep, Transform,
    Transition, TransitionProperty,
};
pub use input::{
    Key, KeyPress, NavigationCommand, PresentationAction, SwipeGesture,
    DEFAULT_SWIPE_THRESHOLD_PX,
};
pub use manifest::{DeckManifest, SlideManifest, MAX_ENTRY_DELAY_MS, MAX_ENTRY_ELEMENTS};
pub use navigator::SlideNavigator;
pub use slide::{Deck, Slide, Visibility};
pub use view_state::{ButtonIcon, NavigationViewState, NextButtonLabel};
