//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the briefing deck domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{DecisionItemId, IncidentId, SlideIndex};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
