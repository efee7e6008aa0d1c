//! In-memory render targets for headless use and tests.

mod deck;
mod decisions;
mod portfolio;

pub use deck::RecordingDeckView;
pub use decisions::RecordingDecisionView;
pub use portfolio::{RecordingContactView, RecordingPortfolioView};
