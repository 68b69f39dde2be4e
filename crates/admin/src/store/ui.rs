//! UI chrome slice.

use fleetdesk_core::Theme;
use serde::{Deserialize, Serialize};

/// State container for layout chrome: theme and sidebar.
///
/// Persisted across restarts as part of the whitelisted snapshot (see
/// [`super::persistence`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSlice {
    /// Active color theme.
    pub theme: Theme,
    /// Whether the navigation sidebar is collapsed.
    pub sidebar_collapsed: bool,
}

impl UiSlice {
    /// Dark-mode toggle.
    pub const fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Sidebar collapse toggle.
    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
