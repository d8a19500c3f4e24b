//! Tests for gallery filtering and lightbox navigation
//!
//! The lightbox steps through the list as it is displayed right now: the
//! filtered list for the active category, truncated in preview mode. Stepping
//! wraps at both ends, and the selected item exists only while the lightbox
//! is open.
//!
//! Example:
//! Items: 1 (technical), 2 (cultural), 3 (technical)
//! Filter "technical" → displayed [1, 3]
//! Open 1, next → 3, next → 1 (wraps, never lands on 2)

use festui::content::{GalleryData, GalleryItem, MediaType};
use festui::logic::navigation::NavDirection;
use festui::model::{EffectRegistry, GalleryViewModel};
use festui::CategoryFilter;

fn item(id: &str, category: &str) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        src: format!("/gallery/{}.jpg", id),
        caption: format!("Photo {}", id),
        category: category.to_string(),
        media_type: MediaType::Image,
        featured: false,
        aspect_ratio: None,
    }
}

fn gallery(items: Vec<GalleryItem>) -> GalleryViewModel {
    GalleryViewModel::new(
        GalleryData {
            items,
            ..Default::default()
        },
        EffectRegistry::new(),
    )
}

/// Helper: ids of the displayed items
fn visible_ids(vm: &GalleryViewModel) -> Vec<String> {
    vm.visible_items().iter().map(|i| i.id.clone()).collect()
}

fn selected_id(vm: &GalleryViewModel) -> Option<String> {
    vm.selected().map(|i| i.id.clone())
}

fn mixed_items() -> Vec<GalleryItem> {
    vec![
        item("1", "technical"),
        item("2", "cultural"),
        item("3", "technical"),
        item("4", "games"),
        item("5", "cultural"),
        item("6", "technical"),
    ]
}

#[test]
fn test_filter_keeps_source_order_for_every_category() {
    let mut vm = gallery(mixed_items());

    for category in ["technical", "cultural", "games"] {
        vm.set_category(category);
        let expected: Vec<String> = mixed_items()
            .into_iter()
            .filter(|i| i.category == category)
            .map(|i| i.id)
            .collect();
        assert_eq!(visible_ids(&vm), expected, "category {}", category);
    }
}

#[test]
fn test_all_returns_full_list() {
    let mut vm = gallery(mixed_items());
    vm.set_category("technical");
    vm.set_category("all");

    assert_eq!(vm.active_category(), &CategoryFilter::All);
    assert_eq!(visible_ids(&vm), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_unknown_category_shows_nothing() {
    let mut vm = gallery(mixed_items());
    vm.set_category("sports");
    assert!(vm.visible_items().is_empty());
}

#[test]
fn test_open_then_close_resets_state() {
    let mut vm = gallery(mixed_items());
    vm.open("3");
    assert!(vm.is_open());

    vm.close();
    let state = vm.state();
    assert!(!state.is_open);
    assert!(state.selected_item.is_none());
}

#[test]
fn test_next_cycle_returns_to_start() {
    let mut vm = gallery(mixed_items());
    let n = vm.visible_items().len();
    vm.open("4");

    for _ in 0..n {
        vm.navigate(NavDirection::Next);
    }
    assert_eq!(selected_id(&vm).as_deref(), Some("4"));
}

#[test]
fn test_prev_undoes_next() {
    let mut vm = gallery(mixed_items());
    vm.open("2");

    vm.navigate(NavDirection::Next);
    vm.navigate(NavDirection::Prev);
    assert_eq!(selected_id(&vm).as_deref(), Some("2"));

    vm.navigate(NavDirection::Prev);
    vm.navigate(NavDirection::Next);
    assert_eq!(selected_id(&vm).as_deref(), Some("2"));
}

#[test]
fn test_next_wraps_from_last_to_first() {
    let mut vm = gallery(vec![item("A", "x"), item("B", "x"), item("C", "x")]);
    vm.open("B");

    vm.navigate(NavDirection::Next);
    assert_eq!(selected_id(&vm).as_deref(), Some("C"));

    vm.navigate(NavDirection::Next);
    assert_eq!(selected_id(&vm).as_deref(), Some("A"));
}

#[test]
fn test_prev_wraps_from_first_to_last() {
    let mut vm = gallery(vec![item("A", "x"), item("B", "x"), item("C", "x")]);
    vm.open("A");

    vm.navigate(NavDirection::Prev);
    assert_eq!(selected_id(&vm).as_deref(), Some("C"));
}

#[test]
fn test_single_item_stays_put() {
    let mut vm = gallery(vec![item("A", "x")]);
    vm.open("A");

    vm.navigate(NavDirection::Next);
    assert_eq!(selected_id(&vm).as_deref(), Some("A"));
    vm.navigate(NavDirection::Prev);
    assert_eq!(selected_id(&vm).as_deref(), Some("A"));
}

#[test]
fn test_filtered_navigation_scenario() {
    let mut vm = gallery(vec![
        item("1", "technical"),
        item("2", "cultural"),
        item("3", "technical"),
    ]);

    vm.set_category("technical");
    assert_eq!(visible_ids(&vm), vec!["1", "3"]);

    vm.open("1");
    vm.navigate(NavDirection::Next);
    assert_eq!(selected_id(&vm).as_deref(), Some("3"));

    vm.navigate(NavDirection::Next);
    assert_eq!(selected_id(&vm).as_deref(), Some("1"));
}

#[test]
fn test_position_tracks_navigation() {
    let mut vm = gallery(mixed_items());
    vm.set_category("technical");
    vm.open("3");
    assert_eq!(vm.selected_position(), Some((2, 3)));

    vm.navigate(NavDirection::Next);
    assert_eq!(vm.selected_position(), Some((3, 3)));

    vm.close();
    assert_eq!(vm.selected_position(), None);
}
