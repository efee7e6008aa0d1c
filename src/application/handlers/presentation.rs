//! PresentationController - routes user input to the deck and decision tracker.
//!
//! Clicks, keys, swipes and context menu picks all arrive as a
//! `PresentationEvent`. Navigation goes to the `SlideNavigator`, checkbox
//! changes to the `DecisionTracker`, and window-level actions to the
//! `PresentationShell` or `SnapshotExporter`.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::deck::{
    KeyPress, NavigationCommand, PresentationAction, SlideNavigator, SwipeGesture,
    DEFAULT_SWIPE_THRESHOLD_PX,
};
use crate::domain::decisions::{DecisionTracker, DEFAULT_EXPORT_FILE_NAME};
use crate::domain::foundation::{DecisionItemId, IncidentId, Timestamp};
use crate::ports::{ExportError, ExportPath, PresentationShell, SnapshotExporter};

/// What the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PreviousButton,
    NextButton,
    /// Slide indicator dot for the given slide.
    Indicator(usize),
    /// Decision checkbox; the click flips it.
    Checkbox(DecisionItemId),
}

/// User input delivered to the presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresentationEvent {
    Click(ClickTarget),
    /// Checkbox change carrying the box's new checked state.
    CheckboxChanged { id: DecisionItemId, approved: bool },
    Key(KeyPress),
    Swipe(SwipeGesture),
    Menu(PresentationAction),
}

/// Result of handling one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// True if the event was bound to an action and acted on.
    pub consumed: bool,
    /// Where decisions were written, for export actions.
    pub exported: Option<ExportPath>,
}

impl EventOutcome {
    fn consumed(consumed: bool) -> Self {
        Self {
            consumed,
            exported: None,
        }
    }

    fn exported(path: ExportPath) -> Self {
        Self {
            consumed: true,
            exported: Some(path),
        }
    }
}

/// Errors surfaced while handling an event.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Decision export failed: {0}")]
    Export(#[from] ExportError),
}

/// Context menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: PresentationAction,
    pub label: &'static str,
}

/// Tunables for a presentation session.
#[derive(Debug, Clone)]
pub struct PresentationSettings {
    pub incident_id: IncidentId,
    pub swipe_threshold_px: f32,
    pub export_file_name: String,
}

impl PresentationSettings {
    pub fn new(incident_id: IncidentId) -> Self {
        Self {
            incident_id,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    pub fn with_swipe_threshold(mut self, threshold_px: f32) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    pub fn with_export_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.export_file_name = file_name.into();
        self
    }
}

/// Single entry point for presentation input.
pub struct PresentationController {
    navigator: SlideNavigator,
    tracker: DecisionTracker,
    shell: Arc<dyn PresentationShell>,
    exporter: Arc<dyn SnapshotExporter>,
    settings: PresentationSettings,
}

impl PresentationController {
    pub fn new(
        navigator: SlideNavigator,
        tracker: DecisionTracker,
        shell: Arc<dyn PresentationShell>,
        exporter: Arc<dyn SnapshotExporter>,
        settings: PresentationSettings,
    ) -> Self {
        Self {
            navigator,
            tracker,
            shell,
            exporter,
            settings,
        }
    }

    pub fn navigator(&self) -> &SlideNavigator {
        &self.navigator
    }

    pub fn tracker(&self) -> &DecisionTracker {
        &self.tracker
    }

    pub async fn handle(
        &mut self,
        event: PresentationEvent,
    ) -> Result<EventOutcome, PresentationError> {
        match event {
            PresentationEvent::Click(target) => Ok(EventOutcome::consumed(self.click(target))),
            PresentationEvent::CheckboxChanged { id, approved } => {
                let known = self.tracker.item(id).is_some();
                self.tracker.set_approved(id, approved);
                Ok(EventOutcome::consumed(known))
            }
            PresentationEvent::Key(press) => {
                if let Some(command) = NavigationCommand::from_key(&press) {
                    self.navigator.apply(command);
                    return Ok(EventOutcome::consumed(true));
                }
                match PresentationAction::from_key(&press) {
                    Some(action) => self.perform(action).await,
                    None => {
                        debug!(key = %press, "Unbound key");
                        Ok(EventOutcome::consumed(false))
                    }
                }
            }
            PresentationEvent::Swipe(gesture) => {
                match gesture.command(self.settings.swipe_threshold_px) {
                    Some(command) => Ok(EventOutcome::consumed(self.navigator.apply(command))),
                    None => {
                        debug!(
                            start_x = gesture.start_x,
                            end_x = gesture.end_x,
                            "Swipe below threshold"
                        );
                        Ok(EventOutcome::consumed(false))
                    }
                }
            }
            PresentationEvent::Menu(action) => self.perform(action).await,
        }
    }

    /// Context menu entries in display order.
    pub fn context_menu(&self) -> Vec<MenuEntry> {
        PresentationAction::MENU
            .iter()
            .map(|&action| MenuEntry {
                action,
                label: action.menu_label(),
            })
            .collect()
    }

    /// Snapshots the current decisions and writes them out.
    pub async fn export_decisions(&self) -> Result<ExportPath, PresentationError> {
        let snapshot = self
            .tracker
            .export_snapshot(&self.settings.incident_id, Timestamp::now());
        let path = self
            .exporter
            .export(&self.settings.export_file_name, &snapshot)
            .await
            .map_err(|e| {
                warn!(error = %e, "Decision export failed");
                e
            })?;
        info!(
            path = %path,
            approved = snapshot.approved_count(),
            total = snapshot.items.len(),
            "Decisions exported"
        );
        Ok(path)
    }

    fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::PreviousButton => self.navigator.previous(),
            ClickTarget::NextButton => self.navigator.next(),
            ClickTarget::Indicator(index) => self.navigator.go_to(index),
            ClickTarget::Checkbox(id) => self.tracker.toggle(id).is_some(),
        }
    }

    async fn perform(
        &mut self,
        action: PresentationAction,
    ) -> Result<EventOutcome, PresentationError> {
        match action {
            PresentationAction::ToggleFullscreen => {
                if self.shell.is_fullscreen() {
                    self.shell.exit_fullscreen();
                } else {
                    self.shell.enter_fullscreen();
                }
                Ok(EventOutcome::consumed(true))
            }
            PresentationAction::Print => {
                self.shell.print();
                Ok(EventOutcome::consumed(true))
            }
            PresentationAction::ExportDecisions => {
                let path = self.export_decisions().await?;
                Ok(EventOutcome::exported(path))
            }
        }
    }
}
