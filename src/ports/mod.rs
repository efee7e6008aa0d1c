//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Render Ports
//!
//! - `DeckView` - Slides, indicators and navigation chrome
//! - `DecisionStatusView` - Decision highlights and the status badge
//! - `PortfolioView` - Navbar, mobile menu and achievement counters
//! - `ContactFormView` - Contact form feedback
//!
//! ## Host Ports
//!
//! - `PresentationShell` - Fullscreen and print
//! - `SnapshotExporter` - Decision export
//! - `TaskScheduler` - Deferred, cancellable callbacks

mod contact_form_view;
mod decision_status_view;
mod deck_view;
mod portfolio_view;
mod presentation_shell;
mod snapshot_exporter;
mod task_scheduler;

pub use contact_form_view::ContactFormView;
pub use decision_status_view::DecisionStatusView;
pub use deck_view::DeckView;
pub use portfolio_view::PortfolioView;
pub use presentation_shell::PresentationShell;
pub use snapshot_exporter::{ExportError, ExportPath, SnapshotExporter};
pub use task_scheduler::{ScheduledTask, TaskHandle, TaskScheduler};
