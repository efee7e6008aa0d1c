//! Domain layer - navigation, decision tracking and portfolio page logic.
//!
//! Everything here is synchronous and owns its state. Rendering and timers
//! go through the traits in `crate::ports`.

pub mod deck;
pub mod decisions;
pub mod foundation;
pub mod portfolio;
