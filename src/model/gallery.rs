//! Gallery Model
//!
//! Owns the category selection, derives the displayed items, and manages the
//! lightbox (modal viewer). All transitions are synchronous and total; the
//! only misuse (opening an item that is not displayed) is a programmer error
//! caught by a debug assertion.
//!
//! The lightbox holds two effect guards while it is open: the page scroll
//! lock and the lightbox key bindings. Closing it, switching category, or
//! dropping the model releases both.

use std::collections::HashMap;

use super::effects::{Effect, EffectGuard, EffectRegistry};
use crate::content::{Category, GalleryData, GalleryItem};
use crate::logic::{self, navigation::NavDirection};
use crate::utils::log_debug;
use crate::{CategoryFilter, GalleryMode};

/// Read-only snapshot for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub active_category: CategoryFilter,
    pub selected_item: Option<GalleryItem>,
    pub is_open: bool,
}

/// An open lightbox; exists only while the modal is shown
#[derive(Debug)]
struct Lightbox {
    item_id: String,
    _scroll_lock: EffectGuard,
    _key_bindings: EffectGuard,
}

#[derive(Debug)]
pub struct GalleryViewModel {
    items: Vec<GalleryItem>,
    categories: Vec<Category>,
    active_category: CategoryFilter,
    mode: GalleryMode,
    lightbox: Option<Lightbox>,
    effects: EffectRegistry,
}

impl GalleryViewModel {
    pub fn new(data: GalleryData, effects: EffectRegistry) -> Self {
        Self {
            items: data.items,
            categories: data.categories,
            active_category: CategoryFilter::All,
            mode: GalleryMode::Full,
            lightbox: None,
            effects,
        }
    }

    pub fn with_mode(mut self, mode: GalleryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    pub fn mode(&self) -> GalleryMode {
        self.mode
    }

    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    /// Switch the active category (`"all"` clears the filter)
    ///
    /// The id is not checked against the known categories; an unknown id
    /// just yields an empty list. An open lightbox is closed first so its
    /// selection can never point outside the new list.
    pub fn set_category(&mut self, category_id: &str) {
        self.set_filter(CategoryFilter::from_id(category_id));
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.lightbox.is_some() {
            log_debug(&format!(
                "Category changed to '{}' while lightbox open, closing",
                filter.as_id()
            ));
            self.close();
        }
        log_debug(&format!("Active category: {}", filter.as_id()));
        self.active_category = filter;
    }

    /// Switch between full and preview mode; closes the lightbox like a filter change
    pub fn set_mode(&mut self, mode: GalleryMode) {
        if self.mode == mode {
            return;
        }
        if self.lightbox.is_some() {
            self.close();
        }
        self.mode = mode;
    }

    /// Items of the active category in source order (truncated in preview mode)
    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        logic::filter::display_items(&self.items, &self.active_category, self.mode)
    }

    /// Open the lightbox on a displayed item
    ///
    /// Callers only ever pass ids taken from `visible_items()`; anything else
    /// trips a debug assertion and is ignored in release builds.
    pub fn open(&mut self, item_id: &str) {
        let is_visible = logic::filter::position_of(&self.visible_items(), item_id).is_some();
        debug_assert!(
            is_visible,
            "open() called with item '{}' outside the visible set",
            item_id
        );
        if !is_visible {
            log_debug(&format!("Ignoring open() for non-visible item '{}'", item_id));
            return;
        }

        match self.lightbox.as_mut() {
            // Already open: just move the selection, keep the held effects
            Some(lightbox) => lightbox.item_id = item_id.to_string(),
            None => {
                self.lightbox = Some(Lightbox {
                    item_id: item_id.to_string(),
                    _scroll_lock: self.effects.acquire(Effect::ScrollLock),
                    _key_bindings: self.effects.acquire(Effect::LightboxKeys),
                });
            }
        }
        log_debug(&format!("Lightbox opened on item '{}'", item_id));
    }

    /// Open the lightbox on the n-th displayed item
    pub fn open_index(&mut self, index: usize) {
        let id = self.visible_items().get(index).map(|item| item.id.clone());
        if let Some(id) = id {
            self.open(&id);
        }
    }

    /// Close the lightbox and release its effects (no-op when closed)
    pub fn close(&mut self) {
        if let Some(lightbox) = self.lightbox.take() {
            log_debug(&format!("Lightbox closed (was on item '{}')", lightbox.item_id));
        }
    }

    /// Step the lightbox selection with wraparound
    ///
    /// The position is looked up in the list as displayed right now. If the
    /// selection is not in it, next lands on the first item and prev on the
    /// last. Does nothing while the lightbox is closed.
    pub fn navigate(&mut self, direction: NavDirection) -> Option<&GalleryItem> {
        let current_id = self.lightbox.as_ref()?.item_id.clone();

        let next_id = {
            let visible = self.visible_items();
            let current = logic::filter::position_of(&visible, &current_id);
            logic::navigation::step_selection(current, visible.len(), direction)
                .map(|idx| visible[idx].id.clone())
        };

        let next_id = next_id?;
        log_debug(&format!(
            "Lightbox {}: '{}' -> '{}'",
            direction.as_str(),
            current_id,
            next_id
        ));
        if let Some(lightbox) = self.lightbox.as_mut() {
            lightbox.item_id = next_id;
        }
        self.selected()
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// The item shown in the lightbox, if open
    pub fn selected(&self) -> Option<&GalleryItem> {
        let id = &self.lightbox.as_ref()?.item_id;
        self.items.iter().find(|item| &item.id == id)
    }

    /// 1-based position of the selection and the displayed count ("3 / 12")
    pub fn selected_position(&self) -> Option<(usize, usize)> {
        let id = &self.lightbox.as_ref()?.item_id;
        let visible = self.visible_items();
        logic::filter::position_of(&visible, id).map(|idx| (idx + 1, visible.len()))
    }

    pub fn state(&self) -> GalleryState {
        GalleryState {
            active_category: self.active_category.clone(),
            selected_item: self.selected().cloned(),
            is_open: self.is_open(),
        }
    }

    pub fn counts_by_category(&self) -> HashMap<String, usize> {
        logic::filter::counts_by_category(&self.items)
    }
}
