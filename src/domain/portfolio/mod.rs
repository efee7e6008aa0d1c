//! Portfolio module - behaviors of the marketing portfolio page.

mod contact;
mod counters;
mod navigation;

pub use contact::{field_feedback, is_valid_email, ContactForm, FieldError, FieldFeedback, FieldKind};
pub use counters::{
    CounterAnimation, CounterSuffix, CounterTarget, CounterTrigger, COUNTER_DURATION,
    COUNTER_FRAMES,
};
pub use navigation::{
    active_section, scroll_target, BarStyle, HamburgerState, MobileMenu, NavbarStyle,
    SectionLayout, DEFAULT_SCROLLED_THRESHOLD_PX, DEFAULT_SECTION_OFFSET_PX,
    FALLBACK_HEADER_HEIGHT_PX,
};
