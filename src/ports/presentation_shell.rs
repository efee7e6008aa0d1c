//! Presentation Shell Port - Window-level capabilities (fullscreen, print).

/// Port for host window operations the presentation can request.
///
/// Requests are fire-and-forget; a host without the capability ignores them.
pub trait PresentationShell: Send + Sync {
    /// Returns true if the presentation currently fills the screen.
    fn is_fullscreen(&self) -> bool;

    fn enter_fullscreen(&self);

    fn exit_fullscreen(&self);

    /// Opens the host's print dialog for the slides.
    fn print(&self);
}
