//! Decision Status View Port - Render target for decision tracking.

use crate::domain::decisions::StatusIndicator;
use crate::domain::foundation::DecisionItemId;

/// Port for rendering checkbox highlights and the floating status badge.
pub trait DecisionStatusView: Send + Sync {
    /// Highlights (or clears) the row of a decision item.
    fn set_item_highlight(&self, item: DecisionItemId, highlighted: bool);

    /// Renders the floating "n/m decisions made" badge.
    fn show_status(&self, status: &StatusIndicator);
}
