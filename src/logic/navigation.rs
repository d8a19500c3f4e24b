//! Navigation selection logic
//!
//! Pure functions for stepping through a list with wraparound. Used by the
//! lightbox (next/previous image) and the category tabs.

/// Direction of a lightbox or tab step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Prev,
}

impl NavDirection {
    pub fn as_str(&self) -> &str {
        match self {
            NavDirection::Next => "next",
            NavDirection::Prev => "prev",
        }
    }
}

/// Calculate the next selection index with wrapping
///
/// Past the last item wraps to the first. With no current selection the
/// first item is chosen.
///
/// # Examples
/// ```
/// use festui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// Before the first item wraps to the last. With no current selection the
/// last item is chosen.
///
/// # Examples
/// ```
/// use festui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Step in `direction` from `current` over a list of `list_len` items
pub fn step_selection(
    current: Option<usize>,
    list_len: usize,
    direction: NavDirection,
) -> Option<usize> {
    match direction {
        NavDirection::Next => next_selection(current, list_len),
        NavDirection::Prev => prev_selection(current, list_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_selection() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(3), 0), None);
        assert_eq!(prev_selection(None, 0), None);
        assert_eq!(prev_selection(Some(0), 0), None);
    }

    #[test]
    fn test_missing_current_resolves_to_ends() {
        // Same outcome as a -1 lookup: next lands on the first, prev on the last
        assert_eq!(next_selection(None, 5), Some(0));
        assert_eq!(prev_selection(None, 5), Some(4));
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(prev_selection(Some(0), 5), Some(4));
    }

    #[test]
    fn test_single_item_self_loop() {
        assert_eq!(next_selection(Some(0), 1), Some(0));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_out_of_bounds_current() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let len = 7;
        for start in 0..len {
            let mut current = Some(start);
            for _ in 0..len {
                current = step_selection(current, len, NavDirection::Next);
            }
            assert_eq!(current, Some(start));
        }
    }

    #[test]
    fn test_prev_inverts_next() {
        let len = 4;
        for start in 0..len {
            let forward = step_selection(Some(start), len, NavDirection::Next);
            assert_eq!(step_selection(forward, len, NavDirection::Prev), Some(start));
        }
    }
}
