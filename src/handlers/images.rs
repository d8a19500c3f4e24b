//! Preview Update Handler
//!
//! Stores finished previews sent back by the image loader tasks.

use festui::utils::log_debug;

use crate::services::PreviewUpdate;
use crate::App;

/// Store a preview result; results for items no longer shown are kept for later
pub fn handle_preview_update(app: &mut App, update: PreviewUpdate) {
    let (item_id, state) = update;
    let is_selected = app
        .model
        .gallery
        .selected()
        .is_some_and(|item| item.id == item_id);

    log_debug(&format!(
        "Preview update for '{}' (selected: {}): {:?}",
        item_id, is_selected, state
    ));

    app.previews.insert(item_id, state);
    if is_selected {
        app.model.ui.sixel_cleanup_frames = 1;
    }
}
