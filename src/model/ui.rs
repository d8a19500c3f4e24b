//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, grid cursor, toasts, and visual state.

use std::time::Instant;

use super::types::VimCommandState;

/// Toasts disappear after this many milliseconds
pub const TOAST_DURATION_MS: u128 = 1500;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Item limit used when preview mode is toggled on
    pub preview_max_items: usize,

    /// Whether the "coming soon" banner is shown under the header
    pub show_banner: bool,

    // ============================================
    // GRID
    // ============================================
    /// Cursor position in the displayed list
    pub grid_selection: Option<usize>,

    /// First grid row on screen
    pub first_row: usize,

    /// Columns in the last rendered grid (updated by the renderer)
    pub grid_columns: usize,

    /// Rows that fit on screen in the last rendered grid
    pub grid_rows: usize,

    // ============================================
    // POPUPS
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Sixel cleanup counter (clear the terminal for N frames)
    pub sixel_cleanup_frames: u8,

    /// Last key press, for idle detection
    pub last_user_action: Instant,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            preview_max_items: 8,
            show_banner: false,
            grid_selection: None,
            first_row: 0,
            grid_columns: 3,
            grid_rows: 1,
            toast_message: None,
            sixel_cleanup_frames: 0,
            last_user_action: Instant::now(),
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => timestamp.elapsed().as_millis() >= TOAST_DURATION_MS,
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn record_user_action(&mut self) {
        self.last_user_action = Instant::now();
    }

    /// Reset the grid cursor for a freshly filtered list
    pub fn reset_grid(&mut self, len: usize) {
        self.grid_selection = if len == 0 { None } else { Some(0) };
        self.first_row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
        assert_eq!(model.preview_max_items, 8);
        assert_eq!(model.vim_command_state, VimCommandState::None);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast_message.is_none());
        assert!(!model.should_dismiss_toast());

        model.show_toast("Test".to_string());
        assert!(model.toast_message.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }

    #[test]
    fn test_reset_grid() {
        let mut model = UiModel::new(false);
        model.grid_selection = Some(7);
        model.first_row = 2;

        model.reset_grid(4);
        assert_eq!(model.grid_selection, Some(0));
        assert_eq!(model.first_row, 0);

        model.reset_grid(0);
        assert_eq!(model.grid_selection, None);
    }
}
