//! Category filtering
//!
//! Pure functions that derive the displayed subset of gallery items.

use std::collections::HashMap;

use crate::content::GalleryItem;
use crate::{CategoryFilter, GalleryMode};

/// Items matching `filter`, in source order
///
/// An unknown category id is not an error: it simply matches nothing.
pub fn filter_by_category<'a>(
    items: &'a [GalleryItem],
    filter: &CategoryFilter,
) -> Vec<&'a GalleryItem> {
    items
        .iter()
        .filter(|item| filter.matches(&item.category))
        .collect()
}

/// Truncate a filtered list according to the gallery mode
pub fn apply_mode<'a>(filtered: Vec<&'a GalleryItem>, mode: GalleryMode) -> Vec<&'a GalleryItem> {
    match mode {
        GalleryMode::Full => filtered,
        GalleryMode::Preview { max_items } => filtered.into_iter().take(max_items).collect(),
    }
}

/// The list the grid and the lightbox both operate on
pub fn display_items<'a>(
    items: &'a [GalleryItem],
    filter: &CategoryFilter,
    mode: GalleryMode,
) -> Vec<&'a GalleryItem> {
    apply_mode(filter_by_category(items, filter), mode)
}

/// Position of the item with `id` in `list`
pub fn position_of(list: &[&GalleryItem], id: &str) -> Option<usize> {
    list.iter().position(|item| item.id == id)
}

/// Item count per category id (used for tab badges)
pub fn counts_by_category(items: &[GalleryItem]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.category.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MediaType;

    fn item(id: &str, category: &str) -> GalleryItem {
        GalleryItem {
            id: id.to_string(),
            src: format!("/gallery/{}.jpg", id),
            caption: String::new(),
            category: category.to_string(),
            media_type: MediaType::Image,
            featured: false,
            aspect_ratio: None,
        }
    }

    fn ids(list: &[&GalleryItem]) -> Vec<String> {
        list.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let items = vec![item("3", "b"), item("1", "a"), item("2", "b")];
        let shown = filter_by_category(&items, &CategoryFilter::All);
        assert_eq!(ids(&shown), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let items = vec![item("1", "t"), item("2", "c"), item("3", "t"), item("4", "t")];
        let shown = filter_by_category(&items, &CategoryFilter::from_id("t"));
        assert_eq!(ids(&shown), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let items = vec![item("1", "t")];
        assert!(filter_by_category(&items, &CategoryFilter::from_id("nope")).is_empty());
    }

    #[test]
    fn test_preview_mode_truncates() {
        let items: Vec<GalleryItem> = (0..12).map(|i| item(&i.to_string(), "t")).collect();
        let shown = display_items(&items, &CategoryFilter::All, GalleryMode::Preview { max_items: 8 });
        assert_eq!(shown.len(), 8);
        assert_eq!(shown[7].id, "7");

        let full = display_items(&items, &CategoryFilter::All, GalleryMode::Full);
        assert_eq!(full.len(), 12);
    }

    #[test]
    fn test_position_of() {
        let items = vec![item("a", "x"), item("b", "x")];
        let list = filter_by_category(&items, &CategoryFilter::All);
        assert_eq!(position_of(&list, "b"), Some(1));
        assert_eq!(position_of(&list, "zzz"), None);
    }

    #[test]
    fn test_counts_by_category() {
        let items = vec![item("1", "t"), item("2", "c"), item("3", "t")];
        let counts = counts_by_category(&items);
        assert_eq!(counts.get("t"), Some(&2));
        assert_eq!(counts.get("c"), Some(&1));
        assert_eq!(counts.get("games"), None);
    }
}
