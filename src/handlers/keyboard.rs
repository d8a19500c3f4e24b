//! Keyboard Input Handler
//!
//! Routes key presses either to the lightbox (while it holds the key
//! binding effect) or to the grid.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use festui::logic::keymap::{self, GridAction, LightboxAction};
use festui::logic::layout::GridMove;
use festui::model::VimCommandState;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.model.record_user_action();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.lightbox_has_keys() {
        handle_lightbox_key(app, key);
    } else {
        handle_grid_key(app, key);
    }
}

fn handle_lightbox_key(app: &mut App, key: KeyEvent) {
    let Some(action) = keymap::lightbox_action(key.code, app.model.ui.vim_mode) else {
        return;
    };
    match action {
        LightboxAction::Close => app.model.close_lightbox(),
        LightboxAction::Navigate(direction) => {
            app.model.navigate_lightbox(direction);
            app.request_preview();
        }
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    // Vim 'gg' needs two presses
    if app.model.ui.vim_mode && key.code == KeyCode::Char('g') && key.modifiers.is_empty() {
        if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
            app.model.ui.vim_command_state = VimCommandState::None;
            app.model.move_cursor(GridMove::First);
        } else {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        return;
    }
    app.model.ui.vim_command_state = VimCommandState::None;

    let page_rows = app.model.ui.grid_rows.max(1);
    let Some(action) =
        keymap::grid_action(key.code, key.modifiers, app.model.ui.vim_mode, page_rows)
    else {
        return;
    };

    match action {
        GridAction::Move(movement) => app.model.move_cursor(movement),
        GridAction::Open => {
            app.model.open_selected();
            app.request_preview();
        }
        GridAction::Category(direction) => app.model.cycle_category(direction),
        GridAction::CategoryIndex(index) => app.model.select_tab(index),
        GridAction::TogglePreviewMode => app.model.toggle_preview_mode(),
        GridAction::ToggleBanner => {
            app.model.ui.show_banner = !app.model.ui.show_banner;
        }
        GridAction::Quit => app.model.ui.should_quit = true,
    }
}
