//! Application Model
//!
//! This module defines the state for the application. The Model is
//! organized into focused sub-models:
//!
//! - **GalleryViewModel**: Category filter, displayed items, lightbox
//! - **UiModel**: Preferences, grid cursor, toasts
//! - **EffectRegistry**: Host effects held by the open lightbox
//!
//! Key principles:
//! - No services: all I/O lives in the binary's `App`
//! - Every state change is a synchronous method call on the UI thread

pub mod effects;
pub mod gallery;
pub mod types;
pub mod ui;

pub use effects::{Effect, EffectGuard, EffectRegistry};
pub use gallery::{GalleryState, GalleryViewModel};
pub use types::*;
pub use ui::UiModel;

use crate::content::{ContentBundle, GalleryItem, SiteConfig};
use crate::logic::{
    self,
    layout::GridMove,
    navigation::NavDirection,
    ui::CategoryTab,
};
use crate::{CategoryFilter, GalleryMode};

/// Root application model composed of focused sub-models
#[derive(Debug)]
pub struct Model {
    /// Gallery items, filter and lightbox
    pub gallery: GalleryViewModel,

    /// Fest-wide text from `siteConfig.json`
    pub site: SiteConfig,

    /// Resolved gallery heading
    pub title: String,

    /// Resolved gallery subheading
    pub subtitle: String,

    /// Category tab strip
    pub tabs: Vec<CategoryTab>,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    pub fn new(content: ContentBundle, vim_mode: bool) -> Self {
        let title = content.site.gallery_title(&content.gallery).to_string();
        let subtitle = content.site.gallery_subtitle(&content.gallery).to_string();
        let tabs = logic::ui::category_tabs(&content.gallery.categories);
        let gallery = GalleryViewModel::new(content.gallery, EffectRegistry::new());

        let mut ui = UiModel::new(vim_mode);
        ui.show_banner = content.site.coming_soon.enabled;
        ui.reset_grid(gallery.visible_items().len());

        Self {
            gallery,
            site: content.site,
            title,
            subtitle,
            tabs,
            ui,
        }
    }

    pub fn effects(&self) -> &EffectRegistry {
        self.gallery.effects()
    }

    /// Whether the lightbox currently owns the arrow/escape keys
    pub fn lightbox_has_keys(&self) -> bool {
        self.effects().is_active(Effect::LightboxKeys)
    }

    pub fn scroll_locked(&self) -> bool {
        self.effects().is_active(Effect::ScrollLock)
    }

    /// Change the category filter and reset the grid cursor
    pub fn select_filter(&mut self, filter: CategoryFilter) {
        if &filter == self.gallery.active_category() {
            return;
        }
        self.gallery.set_filter(filter);
        self.ui.reset_grid(self.gallery.visible_items().len());
        self.ui.sixel_cleanup_frames = 1;
    }

    pub fn cycle_category(&mut self, direction: NavDirection) {
        if let Some(filter) =
            logic::ui::cycle_category(&self.tabs, self.gallery.active_category(), direction)
        {
            self.select_filter(filter);
        }
    }

    /// Jump to a tab by position; out-of-range indices are ignored
    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = self.tabs.get(index) {
            let filter = tab.filter.clone();
            self.select_filter(filter);
        }
    }

    pub fn active_tab_index(&self) -> Option<usize> {
        logic::ui::tab_index(&self.tabs, self.gallery.active_category())
    }

    /// Move the grid cursor; ignored while the scroll lock is held
    pub fn move_cursor(&mut self, movement: GridMove) {
        if self.scroll_locked() {
            return;
        }
        let len = self.gallery.visible_items().len();
        self.ui.grid_selection =
            logic::layout::move_in_grid(self.ui.grid_selection, len, self.ui.grid_columns, movement);
        self.ui.first_row = logic::layout::scroll_to_show(
            self.ui.grid_selection,
            self.ui.grid_columns,
            self.ui.grid_rows,
            self.ui.first_row,
        );
    }

    /// Item under the grid cursor
    pub fn cursor_item(&self) -> Option<&GalleryItem> {
        let idx = self.ui.grid_selection?;
        self.gallery.visible_items().get(idx).copied()
    }

    pub fn open_selected(&mut self) {
        if let Some(idx) = self.ui.grid_selection {
            self.gallery.open_index(idx);
        }
    }

    /// Close the lightbox and leave the grid cursor on the last viewed item
    pub fn close_lightbox(&mut self) {
        if let Some((position, _)) = self.gallery.selected_position() {
            self.ui.grid_selection = Some(position - 1);
            self.ui.first_row = logic::layout::scroll_to_show(
                self.ui.grid_selection,
                self.ui.grid_columns,
                self.ui.grid_rows,
                self.ui.first_row,
            );
        }
        self.gallery.close();
        self.ui.sixel_cleanup_frames = 1;
    }

    pub fn navigate_lightbox(&mut self, direction: NavDirection) {
        if self.gallery.navigate(direction).is_some() {
            self.ui.sixel_cleanup_frames = 1;
        }
    }

    /// Switch full/preview mode and reset the grid cursor
    pub fn set_mode(&mut self, mode: GalleryMode) {
        if let GalleryMode::Preview { max_items } = mode {
            self.ui.preview_max_items = max_items;
        }
        self.gallery.set_mode(mode);
        self.ui.reset_grid(self.gallery.visible_items().len());
    }

    pub fn toggle_preview_mode(&mut self) {
        let mode = match self.gallery.mode() {
            GalleryMode::Full => GalleryMode::Preview {
                max_items: self.ui.preview_max_items,
            },
            GalleryMode::Preview { .. } => GalleryMode::Full,
        };
        self.set_mode(mode);
        self.show_toast(format!("{} gallery", mode.as_str()));
    }

    /// Check if any modal is showing
    pub fn has_modal(&self) -> bool {
        self.gallery.is_open()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn record_user_action(&mut self) {
        self.ui.record_user_action();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, GalleryData, MediaType};

    fn bundle() -> ContentBundle {
        let item = |id: &str, category: &str| GalleryItem {
            id: id.to_string(),
            src: format!("/g/{}.jpg", id),
            caption: String::new(),
            category: category.to_string(),
            media_type: MediaType::Image,
            featured: false,
            aspect_ratio: None,
        };
        ContentBundle {
            gallery: GalleryData {
                title: None,
                subtitle: None,
                categories: vec![
                    Category {
                        id: "technical".to_string(),
                        name: "Technical".to_string(),
                    },
                    Category {
                        id: "cultural".to_string(),
                        name: "Cultural".to_string(),
                    },
                ],
                items: vec![
                    item("1", "technical"),
                    item("2", "cultural"),
                    item("3", "technical"),
                    item("4", "technical"),
                ],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new(bundle(), false);
        assert_eq!(model.tabs.len(), 3);
        assert_eq!(model.ui.grid_selection, Some(0));
        assert_eq!(model.title, "PAST FEST MEMORIES");
        assert!(!model.has_modal());
    }

    #[test]
    fn test_select_tab_resets_cursor() {
        let mut model = Model::new(bundle(), false);
        model.ui.grid_selection = Some(3);
        model.select_tab(2);
        assert_eq!(model.gallery.active_category(), &CategoryFilter::from_id("cultural"));
        assert_eq!(model.ui.grid_selection, Some(0));
        assert_eq!(model.active_tab_index(), Some(2));
    }

    #[test]
    fn test_select_tab_out_of_range() {
        let mut model = Model::new(bundle(), false);
        model.select_tab(9);
        assert_eq!(model.gallery.active_category(), &CategoryFilter::All);
    }

    #[test]
    fn test_cursor_blocked_by_scroll_lock() {
        let mut model = Model::new(bundle(), false);
        model.ui.grid_columns = 2;
        model.open_selected();
        assert!(model.scroll_locked());

        model.move_cursor(GridMove::Down);
        assert_eq!(model.ui.grid_selection, Some(0));

        model.close_lightbox();
        model.move_cursor(GridMove::Down);
        assert_eq!(model.ui.grid_selection, Some(2));
    }

    #[test]
    fn test_close_lightbox_moves_cursor_to_viewed_item() {
        let mut model = Model::new(bundle(), false);
        model.open_selected();
        model.navigate_lightbox(NavDirection::Next);
        model.navigate_lightbox(NavDirection::Next);
        model.close_lightbox();
        assert_eq!(model.ui.grid_selection, Some(2));
        assert_eq!(model.cursor_item().map(|i| i.id.as_str()), Some("3"));
    }

    #[test]
    fn test_cycle_category_closes_lightbox() {
        let mut model = Model::new(bundle(), false);
        model.open_selected();
        assert!(model.lightbox_has_keys());

        model.cycle_category(NavDirection::Next);
        assert!(!model.gallery.is_open());
        assert!(!model.lightbox_has_keys());
        assert!(!model.scroll_locked());
    }

    #[test]
    fn test_toggle_preview_mode() {
        let mut model = Model::new(bundle(), false);
        model.ui.preview_max_items = 2;
        model.toggle_preview_mode();
        assert_eq!(model.gallery.visible_items().len(), 2);
        assert!(model.ui.toast_message.is_some());

        model.toggle_preview_mode();
        assert_eq!(model.gallery.visible_items().len(), 4);
    }
}
