//! Detail-view selection state.
//!
//! Tracks which title is currently open for detail viewing. Selection is a
//! simple toggle: clicking the already-selected id closes the detail view,
//! clicking any other id switches to it.

/// Owns the "which item is open for detail view" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    /// Creates a controller with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the selection for a clicked id.
    ///
    /// If `id` equals the current selection the new selection is none
    /// (closing the detail view); otherwise `id` becomes selected.
    /// Returns the new selection.
    pub fn toggle(&mut self, id: &str) -> Option<&str> {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        self.selected.as_deref()
    }

    /// Clears the selection unconditionally.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Returns the currently selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}
