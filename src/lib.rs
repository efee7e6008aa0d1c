//! Briefing Deck - incident briefing presentation controller
//!
//! Drives a slide deck with keyboard, swipe and menu input, tracks executive
//! decisions with JSON export, and provides the interactive behaviors of a
//! single-page portfolio site. All rendering goes through view ports so the
//! crate runs headless.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
