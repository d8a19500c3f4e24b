//! UI state transition logic
//!
//! Pure functions for the category tab strip.

use crate::content::Category;
use crate::logic::navigation::{step_selection, NavDirection};
use crate::{CategoryFilter, ALL_CATEGORIES};

/// One entry in the category tab strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub filter: CategoryFilter,
    pub label: String,
}

/// Tabs shown above the grid
///
/// The content file usually lists an `"all"` category itself; when it does
/// not, an "All" tab is put in front so there is always a way back.
pub fn category_tabs(categories: &[Category]) -> Vec<CategoryTab> {
    let mut tabs: Vec<CategoryTab> = categories
        .iter()
        .map(|c| CategoryTab {
            filter: CategoryFilter::from_id(&c.id),
            label: c.name.clone(),
        })
        .collect();

    if !categories.iter().any(|c| c.id == ALL_CATEGORIES) {
        tabs.insert(
            0,
            CategoryTab {
                filter: CategoryFilter::All,
                label: "All".to_string(),
            },
        );
    }

    tabs
}

/// Filter of the tab next to `current` in `direction`, wrapping at the ends
///
/// If `current` is not one of the tabs (e.g. set from the command line),
/// stepping starts from outside the strip: next picks the first tab, prev
/// the last.
///
/// # Examples
/// ```
/// use festui::CategoryFilter;
/// use festui::logic::navigation::NavDirection;
/// use festui::logic::ui::{cycle_category, CategoryTab};
///
/// let tabs = vec![
///     CategoryTab { filter: CategoryFilter::All, label: "All".into() },
///     CategoryTab { filter: CategoryFilter::from_id("games"), label: "Games".into() },
/// ];
/// assert_eq!(
///     cycle_category(&tabs, &CategoryFilter::All, NavDirection::Next),
///     Some(CategoryFilter::from_id("games"))
/// );
/// assert_eq!(
///     cycle_category(&tabs, &CategoryFilter::from_id("games"), NavDirection::Next),
///     Some(CategoryFilter::All)
/// );
/// ```
pub fn cycle_category(
    tabs: &[CategoryTab],
    current: &CategoryFilter,
    direction: NavDirection,
) -> Option<CategoryFilter> {
    let current_idx = tab_index(tabs, current);
    step_selection(current_idx, tabs.len(), direction).map(|idx| tabs[idx].filter.clone())
}

pub fn tab_index(tabs: &[CategoryTab], current: &CategoryFilter) -> Option<usize> {
    tabs.iter().position(|t| &t.filter == current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_all_tab_inserted_when_missing() {
        let tabs = category_tabs(&[category("technical", "Technical")]);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].filter, CategoryFilter::All);
        assert_eq!(tabs[1].label, "Technical");
    }

    #[test]
    fn test_all_tab_not_duplicated() {
        let tabs = category_tabs(&[category("all", "Everything"), category("games", "Games")]);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].label, "Everything");
        assert_eq!(tabs[0].filter, CategoryFilter::All);
    }

    #[test]
    fn test_cycle_wraps_backwards() {
        let tabs = category_tabs(&[category("a", "A"), category("b", "B")]);
        assert_eq!(
            cycle_category(&tabs, &CategoryFilter::All, NavDirection::Prev),
            Some(CategoryFilter::from_id("b"))
        );
    }

    #[test]
    fn test_cycle_from_unknown_filter() {
        let tabs = category_tabs(&[category("a", "A")]);
        let unknown = CategoryFilter::from_id("zzz");
        assert_eq!(
            cycle_category(&tabs, &unknown, NavDirection::Next),
            Some(CategoryFilter::All)
        );
        assert_eq!(
            cycle_category(&tabs, &unknown, NavDirection::Prev),
            Some(CategoryFilter::from_id("a"))
        );
    }

    #[test]
    fn test_cycle_no_tabs() {
        assert_eq!(cycle_category(&[], &CategoryFilter::All, NavDirection::Next), None);
    }
}
