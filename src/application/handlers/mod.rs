//! Application handlers.
//!
//! Controllers that turn user input into domain operations and render the
//! results through view ports.

mod contact;
mod portfolio;
mod presentation;

pub use contact::{
    ContactError, ContactTimings, SubmitContactHandler, DEFAULT_SUBMIT_LABEL, SENDING_LABEL,
    SUCCESS_MESSAGE,
};
pub use portfolio::{PortfolioPage, PortfolioSettings};
pub use presentation::{
    ClickTarget, EventOutcome, MenuEntry, PresentationController, PresentationError,
    PresentationEvent, PresentationSettings,
};
