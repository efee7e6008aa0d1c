//! SubmitContactHandler - simulated contact form submission.
//!
//! Nothing leaves the process: a valid form waits out a short delay, then the
//! page shows a thank-you message, clears the fields and restores the button.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ContactConfig;
use crate::domain::portfolio::{ContactForm, FieldError};
use crate::ports::{ContactFormView, TaskHandle, TaskScheduler};

/// Shown once a submission goes through.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
/// Submit button text while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// Errors from submitting the contact form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Timings for the simulated submission.
#[derive(Debug, Clone)]
pub struct ContactTimings {
    pub submit_delay: Duration,
    pub success_visible: Duration,
}

impl Default for ContactTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            success_visible: Duration::from_millis(5000),
        }
    }
}

impl From<&ContactConfig> for ContactTimings {
    fn from(config: &ContactConfig) -> Self {
        Self {
            submit_delay: config.submit_delay(),
            success_visible: config.success_visible(),
        }
    }
}

/// Handler for contact form submissions.
pub struct SubmitContactHandler {
    view: Arc<dyn ContactFormView>,
    scheduler: Arc<dyn TaskScheduler>,
    timings: ContactTimings,
    submit_label: String,
    /// Dismissal of the currently shown success message.
    dismissal: Mutex<Option<TaskHandle>>,
}

impl SubmitContactHandler {
    pub fn new(
        view: Arc<dyn ContactFormView>,
        scheduler: Arc<dyn TaskScheduler>,
        timings: ContactTimings,
    ) -> Self {
        Self {
            view,
            scheduler,
            timings,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            dismissal: Mutex::new(None),
        }
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub async fn handle(&self, form: ContactForm) -> Result<(), ContactError> {
        let errors = form.validate();
        self.view.show_errors(&errors);
        if !errors.is_empty() {
            debug!(count = errors.len(), "Contact form rejected");
            return Err(ContactError::Invalid(errors));
        }

        self.view.set_submit_button(SENDING_LABEL, true);
        tokio::time::sleep(self.timings.submit_delay).await;

        self.view.show_success(SUCCESS_MESSAGE);
        self.view.reset();
        self.view.set_submit_button(&self.submit_label, false);
        info!("Contact form submitted");

        self.schedule_dismissal();
        Ok(())
    }

    fn schedule_dismissal(&self) {
        let view = Arc::clone(&self.view);
        let handle = self.scheduler.schedule(
            self.timings.success_visible,
            Box::new(move || view.clear_success()),
        );
        let mut slot = self.dismissal.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(handle) {
            self.scheduler.cancel(previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ManualTaskScheduler, RecordingContactView};

    fn handler(
        timings: ContactTimings,
    ) -> (
        Arc<SubmitContactHandler>,
        Arc<RecordingContactView>,
        Arc<ManualTaskScheduler>,
    ) {
        let view = Arc::new(RecordingContactView::new());
        let scheduler = Arc::new(ManualTaskScheduler::new());
        let handler = SubmitContactHandler::new(view.clone(), scheduler.clone(), timings);
        (Arc::new(handler), view, scheduler)
    }

    fn instant() -> ContactTimings {
        ContactTimings {
            submit_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn invalid_form_renders_errors_and_keeps_button() {
        let (handler, view, _) = handler(instant());
        let result = handler.handle(ContactForm::new("", "nope", "hi")).await;

        let messages: Vec<_> = view.errors().iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec!["Name is required.", "Please enter a valid email address."]
        );
        assert!(matches!(result, Err(ContactError::Invalid(ref e)) if e.len() == 2));
        assert_eq!(view.submit_button(), None);
        assert_eq!(view.reset_count(), 0);
    }

    #[tokio::test]
    async fn valid_form_shows_success_and_restores_button() {
        let (handler, view, _) = handler(instant());
        handler
            .handle(ContactForm::new("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap();

        assert!(view.errors().is_empty());
        assert_eq!(view.success().as_deref(), Some(SUCCESS_MESSAGE));
        assert_eq!(view.reset_count(), 1);
        assert_eq!(
            view.submit_button(),
            Some((DEFAULT_SUBMIT_LABEL.to_string(), false))
        );
    }

    #[tokio::test]
    async fn success_message_is_dismissed_after_five_seconds() {
        let (handler, view, scheduler) = handler(instant());
        handler
            .handle(ContactForm::new("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap();

        scheduler.advance(Duration::from_millis(4999));
        assert!(view.success().is_some());
        scheduler.advance(Duration::from_millis(1));
        assert!(view.success().is_none());
    }

    #[tokio::test]
    async fn resubmitting_replaces_pending_dismissal() {
        let (handler, _, scheduler) = handler(instant());
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        handler.handle(form.clone()).await.unwrap();
        handler.handle(form).await.unwrap();
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn timings_follow_config() {
        let config = ContactConfig {
            submit_delay_ms: 10,
            success_visible_ms: 20,
        };
        let timings = ContactTimings::from(&config);
        assert_eq!(timings.submit_delay, Duration::from_millis(10));
        assert_eq!(timings.success_visible, Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn button_reads_sending_while_in_flight() {
        let (handler, view, _) = handler(ContactTimings::default());
        let task = {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                handler
                    .handle(ContactForm::new("Ada", "ada@example.com", "Hello"))
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(view.submit_button(), Some((SENDING_LABEL.to_string(), true)));
        assert!(view.success().is_none());

        task.await.unwrap().unwrap();
        assert_eq!(view.success().as_deref(), Some(SUCCESS_MESSAGE));
    }
}
