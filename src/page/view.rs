//! Visible page state.

use super::modal::ENABLE_LABEL;

/// What the user currently sees outside the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub result_visible: bool,
    pub result_text: String,
    pub share_visible: bool,
    pub share_url: String,
    /// Share field contents are selected (after a copy click).
    pub share_selected: bool,
    pub tooltip_visible: bool,
    pub help_note_visible: bool,
    pub toggle_label: String,
    /// Vim status line, read from the attached session; empty while vim
    /// mode is off.
    pub status: String,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            result_visible: false,
            result_text: String::new(),
            share_visible: false,
            share_url: String::new(),
            share_selected: false,
            tooltip_visible: false,
            help_note_visible: false,
            toggle_label: ENABLE_LABEL.to_string(),
            status: String::new(),
        }
    }
}

impl PageView {
    /// Hide the result panel and the share container.
    pub fn hide_panels(&mut self) {
        self.result_visible = false;
        self.share_visible = false;
    }
}
