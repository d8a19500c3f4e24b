use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Fest header (name, dates, countdown)
    pub header_area: Rect,
    /// "Coming soon" banner (if shown)
    pub banner_area: Option<Rect>,
    /// Category tab strip
    pub tabs_area: Rect,
    /// Thumbnail grid
    pub grid_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, show_banner: bool, legend_height: u16) -> LayoutInfo {
    let banner_height = if show_banner { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header (borders + two text lines)
            Constraint::Length(banner_height), // Banner (0 when hidden)
            Constraint::Length(3),             // Category tabs
            Constraint::Min(3),                // Grid
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        banner_area: show_banner.then_some(chunks[1]),
        tabs_area: chunks[2],
        grid_area: chunks[3],
        legend_area: chunks[4],
        status_area: chunks[5],
    }
}

/// Rectangle of `percent_x` x `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x.min(100) / 100;
    let height = area.height * percent_y.min(100) / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
