//! Key bindings
//!
//! Maps crossterm key codes to gallery actions. The lightbox keymap is only
//! consulted while the lightbox holds its key-binding effect; everything
//! else goes through the grid keymap.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::logic::layout::GridMove;
use crate::logic::navigation::NavDirection;

/// Actions bound while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Navigate(NavDirection),
}

/// Escape closes, arrows step; vim mode adds `h`/`l` and `q`
pub fn lightbox_action(code: KeyCode, vim_mode: bool) -> Option<LightboxAction> {
    match code {
        KeyCode::Esc => Some(LightboxAction::Close),
        KeyCode::Right => Some(LightboxAction::Navigate(NavDirection::Next)),
        KeyCode::Left => Some(LightboxAction::Navigate(NavDirection::Prev)),
        KeyCode::Char('l') if vim_mode => Some(LightboxAction::Navigate(NavDirection::Next)),
        KeyCode::Char('h') if vim_mode => Some(LightboxAction::Navigate(NavDirection::Prev)),
        KeyCode::Char('q') if vim_mode => Some(LightboxAction::Close),
        _ => None,
    }
}

/// Actions available on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    Move(GridMove),
    Open,
    Category(NavDirection),
    /// Jump to the n-th category tab (0 = first)
    CategoryIndex(usize),
    TogglePreviewMode,
    ToggleBanner,
    Quit,
}

/// Grid keymap; `page_rows` is how many rows a page key moves
pub fn grid_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    vim_mode: bool,
    page_rows: usize,
) -> Option<GridAction> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    if vim_mode {
        match code {
            KeyCode::Char('h') => return Some(GridAction::Move(GridMove::Left)),
            KeyCode::Char('j') => return Some(GridAction::Move(GridMove::Down)),
            KeyCode::Char('k') => return Some(GridAction::Move(GridMove::Up)),
            KeyCode::Char('l') => return Some(GridAction::Move(GridMove::Right)),
            KeyCode::Char('d') if ctrl => {
                return Some(GridAction::Move(GridMove::PageDown((page_rows / 2).max(1))))
            }
            KeyCode::Char('u') if ctrl => {
                return Some(GridAction::Move(GridMove::PageUp((page_rows / 2).max(1))))
            }
            KeyCode::Char('f') if ctrl => return Some(GridAction::Move(GridMove::PageDown(page_rows))),
            KeyCode::Char('b') if ctrl => return Some(GridAction::Move(GridMove::PageUp(page_rows))),
            KeyCode::Char('G') => return Some(GridAction::Move(GridMove::Last)),
            _ => {}
        }
    }

    match code {
        KeyCode::Char('c') if ctrl => Some(GridAction::Quit),
        KeyCode::Char('q') => Some(GridAction::Quit),
        KeyCode::Up => Some(GridAction::Move(GridMove::Up)),
        KeyCode::Down => Some(GridAction::Move(GridMove::Down)),
        KeyCode::Left => Some(GridAction::Move(GridMove::Left)),
        KeyCode::Right => Some(GridAction::Move(GridMove::Right)),
        KeyCode::PageUp => Some(GridAction::Move(GridMove::PageUp(page_rows))),
        KeyCode::PageDown => Some(GridAction::Move(GridMove::PageDown(page_rows))),
        KeyCode::Home => Some(GridAction::Move(GridMove::First)),
        KeyCode::End => Some(GridAction::Move(GridMove::Last)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GridAction::Open),
        KeyCode::Tab => Some(GridAction::Category(NavDirection::Next)),
        KeyCode::BackTab => Some(GridAction::Category(NavDirection::Prev)),
        KeyCode::Char(c @ '1'..='9') => {
            Some(GridAction::CategoryIndex(c as usize - '1' as usize))
        }
        KeyCode::Char('p') => Some(GridAction::TogglePreviewMode),
        KeyCode::Char('b') => Some(GridAction::ToggleBanner),
        _ => None,
    }
}
