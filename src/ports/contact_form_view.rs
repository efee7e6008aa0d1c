//! Contact Form View Port - Render target for the contact form.

use crate::domain::portfolio::FieldError;

/// Port for rendering contact form feedback.
pub trait ContactFormView: Send + Sync {
    /// Replaces any previous error banner with these messages.
    /// An empty slice removes the banner.
    fn show_errors(&self, errors: &[FieldError]);

    /// Sets the submit button text and enabled state.
    fn set_submit_button(&self, text: &str, disabled: bool);

    fn show_success(&self, message: &str);

    fn clear_success(&self);

    /// Clears every field.
    fn reset(&self);
}
