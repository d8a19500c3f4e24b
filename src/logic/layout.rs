//! Grid layout calculations
//!
//! Pure functions for the thumbnail grid: how many columns fit, which rows
//! are on screen, and how the cursor moves between cells.

/// Terminal rows used by one grid cell (border + caption + category + badges)
pub const CELL_HEIGHT: u16 = 5;

/// Column count for the grid at a given content width
///
/// Mirrors the site's responsive masonry: two columns on narrow screens,
/// three on medium, four on wide.
///
/// # Examples
/// ```
/// use festui::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(60), 2);
/// assert_eq!(grid_columns(100), 3);
/// assert_eq!(grid_columns(180), 4);
/// ```
pub fn grid_columns(width: u16) -> usize {
    if width < 80 {
        2
    } else if width < 140 {
        3
    } else {
        4
    }
}

/// Number of full cell rows that fit in `height`
pub fn visible_rows(height: u16) -> usize {
    ((height / CELL_HEIGHT) as usize).max(1)
}

/// Number of rows needed for `len` items
pub fn total_rows(len: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    len.div_ceil(columns)
}

/// Adjust the first visible row so the selected cell is on screen
pub fn scroll_to_show(
    selected: Option<usize>,
    columns: usize,
    rows_on_screen: usize,
    first_row: usize,
) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if columns == 0 || rows_on_screen == 0 {
        return first_row;
    }

    let row = selected / columns;
    if row < first_row {
        row
    } else if row >= first_row + rows_on_screen {
        row + 1 - rows_on_screen
    } else {
        first_row
    }
}

/// Cursor movement inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
    PageUp(usize),
    PageDown(usize),
    First,
    Last,
}

/// Move the grid cursor; clamps at the edges instead of wrapping
pub fn move_in_grid(
    current: Option<usize>,
    len: usize,
    columns: usize,
    movement: GridMove,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);
    let last = len - 1;
    let current = match current {
        Some(i) => i.min(last),
        None => return Some(0),
    };

    Some(match movement {
        GridMove::Up => current.saturating_sub(columns),
        GridMove::Down => {
            if current + columns <= last {
                current + columns
            } else {
                current
            }
        }
        GridMove::Left => current.saturating_sub(1),
        GridMove::Right => (current + 1).min(last),
        GridMove::PageUp(rows) => current.saturating_sub(columns * rows.max(1)),
        GridMove::PageDown(rows) => (current + columns * rows.max(1)).min(last),
        GridMove::First => 0,
        GridMove::Last => last,
    })
}
