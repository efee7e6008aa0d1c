//! Application layer - controllers over the domain.
//!
//! This layer routes input events to domain objects and coordinates the ports
//! they render through.

pub mod handlers;

pub use handlers::{
    // Presentation
    ClickTarget, EventOutcome, MenuEntry, PresentationController, PresentationError,
    PresentationEvent, PresentationSettings,
    // Portfolio
    ContactError, ContactTimings, PortfolioPage, PortfolioSettings, SubmitContactHandler,
};
