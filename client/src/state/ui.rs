//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (the active theme) out of the course/log
//! controller state so the two can change independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    /// Glyph for the theme toggle button.
    pub fn toggle_icon(&self) -> &'static str {
        self.theme.icon()
    }
}
